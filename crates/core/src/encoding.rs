//! The structured `hex_values` tree every entity produces before flattening.
//!
//! The tree mirrors the canonical field order, so flattening it is a plain
//! depth-first concatenation.

use crate::codec::{compact_size, int_to_hex};
use crate::error::Result;
use serde_json::{Map, Value};

/// One node of an entity's hex encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexValue {
    /// A payload with its CompactSize length prefix in front of it.
    Prefixed { length: String, value: String },
    /// Fixed-width hex copied verbatim (hash references, merkle root).
    Raw(String),
    /// Named children in canonical order.
    Record(Vec<(&'static str, HexValue)>),
    /// Child entities in list order.
    List(Vec<HexValue>),
}

impl HexValue {
    /// Wrap an already hex-encoded payload with its length prefix.
    pub fn prefixed(value: String) -> Result<Self> {
        let length = compact_size(Some(&value))?;
        Ok(HexValue::Prefixed { length, value })
    }

    /// Encode an optional integer field.
    pub fn int(n: Option<u64>) -> Result<Self> {
        Self::prefixed(int_to_hex(n))
    }

    /// Concatenate the tree into the flat canonical hex string.
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            HexValue::Prefixed { length, value } => {
                out.push_str(length);
                out.push_str(value);
            }
            HexValue::Raw(value) => out.push_str(value),
            HexValue::Record(fields) => {
                for (_, field) in fields {
                    field.write_to(out);
                }
            }
            HexValue::List(items) => {
                for item in items {
                    item.write_to(out);
                }
            }
        }
    }

    /// Render as JSON, using `<name>_length` / `<name>` keys for prefixed fields.
    pub fn to_json(&self) -> Value {
        match self {
            HexValue::Prefixed { value, .. } | HexValue::Raw(value) => Value::String(value.clone()),
            HexValue::Record(fields) => {
                let mut map = Map::new();
                for (name, field) in fields {
                    if let HexValue::Prefixed { length, .. } = field {
                        map.insert(format!("{}_length", name), Value::String(length.clone()));
                    }
                    map.insert((*name).to_string(), field.to_json());
                }
                Value::Object(map)
            }
            HexValue::List(items) => Value::Array(items.iter().map(HexValue::to_json).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_in_order() {
        let tree = HexValue::Record(vec![
            ("count", HexValue::int(Some(1)).unwrap()),
            ("hash", HexValue::Raw("00000000".into())),
            (
                "items",
                HexValue::List(vec![
                    HexValue::int(None).unwrap(),
                    HexValue::prefixed("abcd".into()).unwrap(),
                ]),
            ),
        ]);
        assert_eq!(tree.flatten(), "0101000000000002abcd");
    }

    #[test]
    fn test_to_json_adds_length_keys() {
        let tree = HexValue::Record(vec![
            ("value", HexValue::int(Some(5_000_000_000)).unwrap()),
            ("block_hash", HexValue::Raw("00000000".into())),
        ]);
        assert_eq!(
            tree.to_json(),
            json!({
                "value_length": "05",
                "value": "012a05f200",
                "block_hash": "00000000",
            })
        );
    }
}
