//! JSON interop for entities handed over by the validation layer.

use crate::error::{EncodingError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

fn json_error(entity: &'static str, reason: impl ToString) -> EncodingError {
    EncodingError::InvalidData {
        entity,
        reason: reason.to_string(),
    }
}

/// Render JSON with a four space indent.
pub fn pretty(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser).map_err(|e| json_error("JSON", e))?;
    String::from_utf8(buf).map_err(|e| json_error("JSON", e))
}

/// Conversion between an entity and its JSON form.
///
/// Absent (`None`) fields are omitted when serializing.
pub trait JsonSerializable: Serialize + DeserializeOwned {
    /// Name used in error messages.
    const ENTITY: &'static str;

    /// Build an entity from JSON data.
    fn from_json(json: Value) -> Result<Self> {
        serde_json::from_value(json).map_err(|e| json_error(Self::ENTITY, e))
    }

    /// Parse an entity from JSON text.
    fn from_text(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| json_error(Self::ENTITY, e))
    }

    fn to_json(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| json_error(Self::ENTITY, e))
    }

    /// Pretty-printed JSON text.
    fn text(&self) -> Result<String> {
        pretty(&self.to_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_uses_four_space_indent() {
        let text = pretty(&json!({ "value": 7 })).unwrap();
        assert_eq!(text, "{\n    \"value\": 7\n}");
    }
}
