//! Errors raised while encoding and hashing ledger entities.

use thiserror::Error;

/// Errors that can occur while producing `hex_values`, `hex`, `hash` or a merkle root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("invalid hex string: {0:?}")]
    InvalidHex(String),

    #[error("invalid length for hex string: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("{entity} is missing required field '{field}'")]
    IncompleteEntity {
        entity: &'static str,
        field: &'static str,
    },

    #[error("no transactions to compute the merkle root")]
    EmptyTransactionSet,

    #[error("merkle root computation for {count} transactions is not implemented")]
    UnsupportedMerkleTree { count: usize },

    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("invalid data for {entity}: {reason}")]
    InvalidData {
        entity: &'static str,
        reason: String,
    },
}

impl EncodingError {
    pub(crate) fn missing(entity: &'static str, field: &'static str) -> Self {
        Self::IncompleteEntity { entity, field }
    }
}

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodingError>;
