//! The chain held by a node.

use caesar_core::{genesis_block, Block, EncodingError, Hash};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during node operations.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("block already in chain: {0}")]
    DuplicateBlock(Hash),
}

pub type Result<T> = std::result::Result<T, NodeError>;

/// A block together with the hash it was accepted under.
#[derive(Debug, Clone)]
struct ChainEntry {
    hash: Hash,
    block: Block,
}

/// A node holding the chain in memory.
#[derive(Debug, Clone)]
pub struct Node {
    /// Never empty: index 0 is the genesis block.
    chain: Vec<ChainEntry>,
}

impl Node {
    /// Create a node whose chain holds only the genesis block.
    pub fn new() -> Result<Self> {
        let genesis = genesis_block()?;
        let hash = genesis.hash()?;
        info!(%hash, "processed genesis block");
        Ok(Self {
            chain: vec![ChainEntry {
                hash,
                block: genesis,
            }],
        })
    }

    /// Append a block to the chain and return its hash.
    ///
    /// The block must encode and hash successfully and must not already be
    /// in the chain.
    pub fn process_block(&mut self, block: Block) -> Result<Hash> {
        let hash = block.hash()?;
        if self.chain.iter().any(|entry| entry.hash == hash) {
            return Err(NodeError::DuplicateBlock(hash));
        }

        self.chain.push(ChainEntry { hash, block });
        info!(height = self.height(), %hash, "appended block");
        Ok(hash)
    }

    /// Height of the tip (0 for a chain holding only genesis).
    pub fn height(&self) -> u64 {
        (self.chain.len() - 1) as u64
    }

    /// The most recent block.
    pub fn tip(&self) -> &Block {
        &self.last().block
    }

    /// Hash of the most recent block.
    pub fn tip_hash(&self) -> Hash {
        self.last().hash
    }

    /// Get a block by its height.
    pub fn get_block_by_height(&self, height: u64) -> Option<&Block> {
        let index = usize::try_from(height).ok()?;
        self.chain.get(index).map(|entry| &entry.block)
    }

    /// Get a block by its hash.
    pub fn get_block_by_hash(&self, hash: &Hash) -> Option<&Block> {
        self.chain
            .iter()
            .find(|entry| &entry.hash == hash)
            .map(|entry| &entry.block)
    }

    /// Blocks in chain order, genesis first.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.chain.iter().map(|entry| &entry.block)
    }

    fn last(&self) -> &ChainEntry {
        // `chain` always holds genesis.
        &self.chain[self.chain.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caesar_core::{HexString, Input, Output, PreviousBlock, PreviousOutput, Transaction, GENESIS_HASH};

    fn next_block(height: u64, value: u64) -> Block {
        let input = Input::new(
            PreviousOutput {
                block_height: None,
                transaction_hash: Some(HexString::new("00000000").unwrap()),
                output_index: None,
            },
            "00",
        );
        let tx = Transaction::new(vec![input], vec![Output::new(value, "OP_0")], 0);
        Block::new(
            1,
            PreviousBlock {
                block_height: Some(height),
                block_hash: Some(HexString::new("00000000").unwrap()),
            },
            "2024-11-18T09:00:00Z",
            vec![tx],
        )
    }

    #[test]
    fn test_new_node_holds_genesis() {
        let node = Node::new().unwrap();
        assert_eq!(node.height(), 0);
        assert!(node.tip().is_genesis());
        assert_eq!(node.tip_hash().to_hex(), GENESIS_HASH);
        assert_eq!(node.blocks().count(), 1);
    }

    #[test]
    fn test_process_block() {
        let mut node = Node::new().unwrap();
        let block = next_block(0, 100);
        let hash = node.process_block(block.clone()).unwrap();

        assert_eq!(node.height(), 1);
        assert_eq!(node.tip_hash(), hash);
        assert_eq!(node.get_block_by_height(1), Some(&block));
        assert_eq!(node.get_block_by_hash(&hash), Some(&block));
        assert!(node.get_block_by_height(2).is_none());
    }

    #[test]
    fn test_duplicate_block_rejected() {
        let mut node = Node::new().unwrap();
        node.process_block(next_block(0, 100)).unwrap();
        assert!(matches!(
            node.process_block(next_block(0, 100)),
            Err(NodeError::DuplicateBlock(_))
        ));
        assert_eq!(node.height(), 1);
    }

    #[test]
    fn test_unencodable_block_rejected() {
        let mut node = Node::new().unwrap();
        let mut block = next_block(0, 100);
        block.transactions.clear();
        assert!(matches!(
            node.process_block(block),
            Err(NodeError::Encoding(EncodingError::EmptyTransactionSet))
        ));
        assert_eq!(node.height(), 0);
    }
}
