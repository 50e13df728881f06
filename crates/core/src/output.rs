//! Transaction outputs.

use crate::encoding::HexValue;
use crate::error::{EncodingError, Result};
use crate::json::JsonSerializable;
use crate::script::script_to_hex;
use serde::{Deserialize, Serialize};

/// A transaction output: an amount locked by a script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Amount in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    /// Mnemonic lock script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_script: Option<String>,
}

impl Output {
    pub fn new(value: u64, lock_script: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            lock_script: Some(lock_script.into()),
        }
    }

    /// `value_length, value, lock_script_length, lock_script`.
    ///
    /// Both fields must be set.
    pub fn hex_values(&self) -> Result<HexValue> {
        let value = self.value.ok_or_else(|| EncodingError::missing("Output", "value"))?;
        let lock_script = self
            .lock_script
            .as_deref()
            .ok_or_else(|| EncodingError::missing("Output", "lock_script"))?;

        Ok(HexValue::Record(vec![
            ("value", HexValue::int(Some(value))?),
            ("lock_script", HexValue::prefixed(script_to_hex(Some(lock_script))?)?),
        ]))
    }

    /// Canonical hex encoding.
    pub fn hex(&self) -> Result<String> {
        Ok(self.hex_values()?.flatten())
    }
}

impl JsonSerializable for Output {
    const ENTITY: &'static str = "Output";
}
