//! Core ledger primitives for caesar.
//!
//! This crate turns ledger entities into their canonical hex form and hashes
//! that form into identifiers:
//! - Hex strings, integer rendering and CompactSize prefixes
//! - Mnemonic script encoding
//! - SHA-256 identifiers and the toy address hash
//! - Outputs, inputs, transactions and blocks
//! - Toy key and address derivation
//! - The genesis block fixture

pub mod block;
pub mod codec;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod genesis;
pub mod hash;
pub mod input;
pub mod json;
pub mod merkle;
pub mod output;
pub mod script;
pub mod transaction;

// Re-export commonly used types at the crate root
pub use block::{timestamp_to_int, Block, PreviousBlock};
pub use codec::{compact_size, int_to_hex, HexString, REFERENCE_HASH_LEN};
pub use crypto::{Address, CryptoError, PublicKey, SecretKey};
pub use encoding::HexValue;
pub use error::{EncodingError, Result};
pub use genesis::{genesis_block, GENESIS_HASH};
pub use hash::{crypto_hash, sha256, toy_mix, Hash};
pub use input::{Input, PreviousOutput};
pub use json::JsonSerializable;
pub use merkle::merkle_root;
pub use output::Output;
pub use script::{script_to_hex, Opcode, ScriptToken};
pub use transaction::Transaction;
