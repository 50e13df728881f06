//! Transactions and their identifiers.

use crate::encoding::HexValue;
use crate::error::Result;
use crate::hash::{crypto_hash, Hash};
use crate::input::Input;
use crate::json::JsonSerializable;
use crate::output::Output;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A transaction spending inputs into outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<u64>,
    #[serde(default)]
    pub inputs: Vec<Input>,
    #[serde(default)]
    pub outputs: Vec<Output>,
}

impl Transaction {
    /// Create a transaction whose counts match its lists.
    pub fn new(inputs: Vec<Input>, outputs: Vec<Output>, fee: u64) -> Self {
        Self {
            input_count: Some(inputs.len() as u64),
            output_count: Some(outputs.len() as u64),
            fee: Some(fee),
            inputs,
            outputs,
        }
    }

    /// Counts and fee, each with its length prefix, then every input and every output.
    pub fn hex_values(&self) -> Result<HexValue> {
        let inputs = self
            .inputs
            .iter()
            .map(Input::hex_values)
            .collect::<Result<Vec<_>>>()?;
        let outputs = self
            .outputs
            .iter()
            .map(Output::hex_values)
            .collect::<Result<Vec<_>>>()?;

        Ok(HexValue::Record(vec![
            ("input_count", HexValue::int(self.input_count)?),
            ("output_count", HexValue::int(self.output_count)?),
            ("fee", HexValue::int(self.fee)?),
            ("inputs", HexValue::List(inputs)),
            ("outputs", HexValue::List(outputs)),
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
        debug!(bytes = hex.len() / 2, %hash, "hashed transaction");
        Ok(hash)
    }
}

impl JsonSerializable for Transaction {
    const ENTITY: &'static str = "Transaction";
}
