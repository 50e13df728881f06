//! Hex string validation, integer rendering and CompactSize length prefixes.

use crate::error::{EncodingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte width of the hash references an input or block carries
/// (`transaction_hash`, `block_hash`).
pub const REFERENCE_HASH_LEN: usize = 4;

/// A validated, lowercase hex string with an even number of characters.
///
/// A leading `0x`/`0X` is stripped on construction. The empty string is a valid
/// (zero byte) value.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexString(String);

impl HexString {
    /// Validate and normalize a hex string.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let raw = value.as_ref();
        let digits = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .unwrap_or(raw);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) || digits.len() % 2 != 0 {
            return Err(EncodingError::InvalidHex(raw.to_string()));
        }
        Ok(Self(digits.to_ascii_lowercase()))
    }

    /// Validate a hex string that must be exactly `bytes` bytes long.
    pub fn with_length(value: impl AsRef<str>, bytes: usize) -> Result<Self> {
        let hex = Self::new(value)?;
        hex.expect_len(bytes)?;
        Ok(hex)
    }

    /// Encode raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Check that this value is exactly `bytes` bytes long.
    pub fn expect_len(&self, bytes: usize) -> Result<&Self> {
        if self.byte_len() != bytes {
            return Err(EncodingError::LengthMismatch {
                expected: bytes,
                actual: self.byte_len(),
            });
        }
        Ok(self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bytes this string encodes.
    pub fn byte_len(&self) -> usize {
        self.0.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode to raw bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        hex::decode(&self.0).map_err(|_| EncodingError::InvalidHex(self.0.clone()))
    }
}

impl fmt::Debug for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexString({})", self.0)
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexString {
    type Error = EncodingError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for HexString {
    type Error = EncodingError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<HexString> for String {
    fn from(hex: HexString) -> Self {
        hex.0
    }
}

/// Prepend a single `'0'` when `value` has an odd number of characters.
pub fn ensure_even_length(value: String) -> String {
    if value.len() % 2 != 0 {
        format!("0{}", value)
    } else {
        value
    }
}

/// Render an integer as minimal big-endian hex, padded to an even length.
///
/// `None` renders as the empty string. The width is not fixed:
/// `5_000_000_000` becomes `"012a05f200"`.
pub fn int_to_hex(n: Option<u64>) -> String {
    match n {
        Some(n) => ensure_even_length(format!("{:x}", n)),
        None => String::new(),
    }
}

/// Append the CompactSize encoding of `n` to `out`.
pub fn encode_compact_size(n: u64, out: &mut Vec<u8>) {
    match n {
        0x00..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// CompactSize prefix for the byte length of `hex_value`, as hex.
///
/// `None` (the field never existed) yields no prefix at all, whereas an empty
/// but present value yields `"00"`.
pub fn compact_size(hex_value: Option<&str>) -> Result<String> {
    let Some(value) = hex_value else {
        return Ok(String::new());
    };
    if value.len() % 2 != 0 {
        return Err(EncodingError::InvalidHex(value.to_string()));
    }

    let mut out = Vec::with_capacity(9);
    encode_compact_size((value.len() / 2) as u64, &mut out);
    Ok(hex::encode(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes_of_len(n: usize) -> String {
        "ab".repeat(n)
    }

    #[test]
    fn test_int_to_hex_is_minimal_and_even() {
        assert_eq!(int_to_hex(None), "");
        assert_eq!(int_to_hex(Some(0)), "00");
        assert_eq!(int_to_hex(Some(1)), "01");
        assert_eq!(int_to_hex(Some(0xfff)), "0fff");
        assert_eq!(int_to_hex(Some(5_000_000_000)), "012a05f200");
    }

    #[test]
    fn test_int_to_hex_parses_back() {
        for n in [0u64, 1, 15, 16, 255, 256, 65_535, 1 << 32, u64::MAX] {
            let h = int_to_hex(Some(n));
            assert_eq!(h.len() % 2, 0);
            assert_eq!(u64::from_str_radix(&h, 16).unwrap(), n);
        }
    }

    #[test]
    fn test_compact_size_none_vs_empty() {
        assert_eq!(compact_size(None).unwrap(), "");
        assert_eq!(compact_size(Some("")).unwrap(), "00");
    }

    #[test]
    fn test_compact_size_boundaries() {
        assert_eq!(compact_size(Some(&bytes_of_len(0xfc))).unwrap(), "fc");
        assert_eq!(compact_size(Some(&bytes_of_len(0xfd))).unwrap(), "fdfd00");
        assert_eq!(compact_size(Some(&bytes_of_len(0xffff))).unwrap(), "fdffff");
        assert_eq!(
            compact_size(Some(&bytes_of_len(0x1_0000))).unwrap(),
            "fe00000100"
        );
    }

    #[test]
    fn test_encode_compact_size_wide() {
        let mut out = Vec::new();
        encode_compact_size(0xffff_ffff, &mut out);
        assert_eq!(hex::encode(&out), "feffffffff");

        out.clear();
        encode_compact_size(0x1_0000_0000, &mut out);
        assert_eq!(hex::encode(out), "ff0000000001000000");
    }

    #[test]
    fn test_compact_size_rejects_odd_length() {
        assert!(matches!(
            compact_size(Some("abc")),
            Err(EncodingError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_hex_string_normalizes() {
        let h = HexString::new("0xDEADbeef").unwrap();
        assert_eq!(h.as_str(), "deadbeef");
        assert_eq!(h.byte_len(), 4);
        assert_eq!(h.to_bytes().unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_hex_string_rejects_bad_input() {
        assert!(matches!(
            HexString::new("xyz0"),
            Err(EncodingError::InvalidHex(_))
        ));
        assert!(matches!(
            HexString::new("abc"),
            Err(EncodingError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_hex_string_fixed_length() {
        let sk = "4d97755ababdaf0b29d880a22aebfaa903b60be619831a86f98f1fe00adbe026";
        assert!(HexString::with_length(sk, 32).is_ok());
        assert_eq!(
            HexString::with_length(sk, 4),
            Err(EncodingError::LengthMismatch {
                expected: 4,
                actual: 32
            })
        );
    }

    #[test]
    fn test_hex_string_serde() {
        let h: HexString = serde_json::from_str("\"00000000\"").unwrap();
        assert_eq!(h.byte_len(), 4);
        assert_eq!(serde_json::to_string(&h).unwrap(), "\"00000000\"");
        assert!(serde_json::from_str::<HexString>("\"zz\"").is_err());
    }
}
