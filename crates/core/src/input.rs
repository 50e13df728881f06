//! Transaction inputs.

use crate::codec::{HexString, REFERENCE_HASH_LEN};
use crate::encoding::HexValue;
use crate::error::{EncodingError, Result};
use crate::json::JsonSerializable;
use crate::script::script_to_hex;
use serde::{Deserialize, Serialize};

/// Reference to the output an input spends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
    /// Fixed-width reference, copied verbatim into the encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<HexString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_index: Option<u64>,
}

/// A transaction input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    #[serde(default)]
    pub previous_output: PreviousOutput,
    /// Mnemonic unlock script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_script: Option<String>,
}

impl Input {
    pub fn new(previous_output: PreviousOutput, unlock_script: impl Into<String>) -> Self {
        Self {
            previous_output,
            unlock_script: Some(unlock_script.into()),
        }
    }

    /// `block_height_length, block_height, transaction_hash, output_index_length,
    /// output_index, unlock_script_length, unlock_script`.
    pub fn hex_values(&self) -> Result<HexValue> {
        let prev = &self.previous_output;
        let transaction_hash = prev
            .transaction_hash
            .as_ref()
            .ok_or_else(|| EncodingError::missing("Input", "previous_output.transaction_hash"))?
            .expect_len(REFERENCE_HASH_LEN)?;

        let previous_output = HexValue::Record(vec![
            ("block_height", HexValue::int(prev.block_height)?),
            ("transaction_hash", HexValue::Raw(transaction_hash.to_string())),
            ("output_index", HexValue::int(prev.output_index)?),
        ]);

        Ok(HexValue::Record(vec![
            ("previous_output", previous_output),
            (
                "unlock_script",
                HexValue::prefixed(script_to_hex(self.unlock_script.as_deref())?)?,
            ),
        ]))
    }

    /// Canonical hex encoding.
    pub fn hex(&self) -> Result<String> {
        Ok(self.hex_values()?.flatten())
    }
}

impl JsonSerializable for Input {
    const ENTITY: &'static str = "Input";
}
