//! The genesis block fixture.

use crate::block::Block;
use crate::error::Result;
use crate::json::JsonSerializable;
use serde_json::{json, Value};

/// Timestamp of the genesis block.
pub const GENESIS_TIMESTAMP: &str = "2024-11-18T08:09:09Z";

/// Text carried by the coinbase unlock script.
pub const GENESIS_MESSAGE: &str = "Wisdom comes from the desert.";

/// Public key hash the genesis reward is locked to.
pub const GENESIS_PUBLIC_KEY_HASH: &str = "f575f780";

/// Reward paid by the genesis coinbase output.
pub const GENESIS_REWARD: u64 = 5_000_000_000;

/// Hash of the genesis block. Any encoding change that moves this is a
/// consensus break.
pub const GENESIS_HASH: &str = "592966afcb7110ff9c8ece1eb469f61da46efeb3c09fabbd23762388b832deee";

/// The genesis block in its JSON form.
pub fn genesis_block_json() -> Value {
    json!({
        "version": 1,
        "previous_block": {
            "block_height": null,
            "block_hash": "00000000",
        },
        "timestamp": GENESIS_TIMESTAMP,
        "mining_difficulty_threshold": 0,
        "nonce": 0,
        "merkle_root": null,
        "transaction_count": 1,
        "transactions": [
            {
                "input_count": 1,
                "output_count": 1,
                "fee": 0,
                "inputs": [
                    {
                        "previous_output": {
                            "block_height": null,
                            "transaction_hash": "00000000",
                            "output_index": null,
                        },
                        "unlock_script": hex::encode(GENESIS_MESSAGE),
                    }
                ],
                "outputs": [
                    {
                        "value": GENESIS_REWARD,
                        "lock_script": format!(
                            "OP_DUPLICATE OP_HASH_160 {} OP_EQUAL_VERIFY OP_CHECK_SIGNATURE",
                            GENESIS_PUBLIC_KEY_HASH
                        ),
                    }
                ],
            }
        ],
    })
}

/// Build the genesis block.
pub fn genesis_block() -> Result<Block> {
    Block::from_json(genesis_block_json())
}
