//! Blocks and their identifiers.

use crate::codec::{HexString, REFERENCE_HASH_LEN};
use crate::encoding::HexValue;
use crate::error::{EncodingError, Result};
use crate::hash::{crypto_hash, Hash};
use crate::json::JsonSerializable;
use crate::merkle::merkle_root;
use crate::transaction::Transaction;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Accepted timestamp layout (ISO-8601, UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse an ISO-8601 UTC timestamp into Unix epoch seconds.
pub fn timestamp_to_int(timestamp: &str) -> Result<u64> {
    let invalid = || EncodingError::InvalidTimestamp(timestamp.to_string());
    let parsed = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|_| invalid())?;
    u64::try_from(parsed.and_utc().timestamp()).map_err(|_| invalid())
}

/// Reference to the block this one extends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
    /// Fixed-width reference, copied verbatim into the encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<HexString>,
}

/// A block of transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default)]
    pub previous_block: PreviousBlock,
    /// ISO-8601 UTC, e.g. `2024-11-18T08:09:09Z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mining_difficulty_threshold: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_count: Option<u64>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create a block with zero difficulty and nonce whose count matches its list.
    pub fn new(
        version: u32,
        previous_block: PreviousBlock,
        timestamp: impl Into<String>,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            version: Some(version),
            previous_block,
            timestamp: Some(timestamp.into()),
            mining_difficulty_threshold: Some(0),
            nonce: Some(0),
            transaction_count: Some(transactions.len() as u64),
            transactions,
        }
    }

    /// Merkle root of the transactions. Defined only for exactly one transaction.
    pub fn merkle_root(&self) -> Result<Hash> {
        let hashes = self
            .transactions
            .iter()
            .map(Transaction::hash)
            .collect::<Result<Vec<_>>>()?;
        merkle_root(&hashes)
    }

    /// Unix epoch seconds of the block timestamp.
    pub fn timestamp_secs(&self) -> Result<u64> {
        let timestamp = self
            .timestamp
            .as_deref()
            .ok_or_else(|| EncodingError::missing("Block", "timestamp"))?;
        timestamp_to_int(timestamp)
    }

    /// Header fields in canonical order, then every transaction.
    pub fn hex_values(&self) -> Result<HexValue> {
        let prev = &self.previous_block;
        let block_hash = prev
            .block_hash
            .as_ref()
            .ok_or_else(|| EncodingError::missing("Block", "previous_block.block_hash"))?
            .expect_len(REFERENCE_HASH_LEN)?;
        let merkle_root = self.merkle_root()?;
        let timestamp = self.timestamp_secs()?;
        let transactions = self
            .transactions
            .iter()
            .map(Transaction::hex_values)
            .collect::<Result<Vec<_>>>()?;

        let previous_block = HexValue::Record(vec![
            ("block_height", HexValue::int(prev.block_height)?),
            ("block_hash", HexValue::Raw(block_hash.to_string())),
        ]);

        Ok(HexValue::Record(vec![
            ("version", HexValue::int(self.version.map(u64::from))?),
            ("previous_block", previous_block),
            ("merkle_root", HexValue::Raw(merkle_root.to_hex_string().into())),
            ("timestamp", HexValue::int(Some(timestamp))?),
            (
                "mining_difficulty_threshold",
                HexValue::int(self.mining_difficulty_threshold)?,
            ),
            ("nonce", HexValue::int(self.nonce)?),
            ("transaction_count", HexValue::int(self.transaction_count)?),
            ("transactions", HexValue::List(transactions)),
        ]))
    }

    /// Canonical hex encoding.
    pub fn hex(&self) -> Result<String> {
        Ok(self.hex_values()?.flatten())
    }

    /// SHA-256 of the canonical encoding.
    pub fn hash(&self) -> Result<Hash> {
        let hex = self.hex()?;
        let hash = crypto_hash(&hex)?;
        debug!(bytes = hex.len() / 2, %hash, "hashed block");
        Ok(hash)
    }

    /// Check if this block starts a chain (no previous height).
    pub fn is_genesis(&self) -> bool {
        self.previous_block.block_height.is_none()
    }

    /// Get the number of transactions in this block.
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }
}

impl JsonSerializable for Block {
    const ENTITY: &'static str = "Block";
}
