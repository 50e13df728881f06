//! In-memory node for caesar.
//!
//! The node keeps the chain as an ordered list of blocks, seeded with the
//! genesis block. Blocks are appended once their canonical encoding hashes;
//! there is no consensus or proof-of-work validation.
//!
//! # Example
//!
//! ```rust
//! use caesar_chain::Node;
//! use caesar_core::GENESIS_HASH;
//!
//! let node = Node::new().unwrap();
//! assert_eq!(node.height(), 0);
//! assert_eq!(node.tip_hash().to_hex(), GENESIS_HASH);
//! ```

pub mod node;

// Re-export commonly used types
pub use node::{Node, NodeError, Result};
