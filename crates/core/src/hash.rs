//! SHA-256 identifiers and the toy mixing hash used for addresses.

use crate::codec::HexString;
use crate::error::{EncodingError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A SHA-256 digest identifying a transaction or block.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Convert to a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Convert to a fixed-width (32 byte) [`HexString`].
    pub fn to_hex_string(&self) -> HexString {
        HexString::from_bytes(&self.0)
    }

    /// Parse from a 64 character hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = HexString::with_length(s, 32)?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&hex.to_bytes()?);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", &self.to_hex()[..8])
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Single SHA-256 over raw bytes.
pub fn sha256(data: &[u8]) -> Hash {
    Hash(Sha256::digest(data).into())
}

/// SHA-256 over the bytes a hex string denotes.
///
/// This is the identifier hash for transactions and blocks.
pub fn crypto_hash(hex: &str) -> Result<Hash> {
    let bytes = HexString::new(hex)?.to_bytes()?;
    Ok(sha256(&bytes))
}

/// The toy address hash: `(n << 3) mod 2^32`, as 8 zero-padded hex digits.
///
/// `n` is the integer the (non-empty) hex string denotes, so only its low
/// 32 bits matter. Not a cryptographic hash; never use it for identifiers.
pub fn toy_mix(hex: &str) -> Result<String> {
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EncodingError::InvalidHex(hex.to_string()));
    }

    let tail = &hex[hex.len().saturating_sub(8)..];
    let n = u32::from_str_radix(tail, 16).map_err(|_| EncodingError::InvalidHex(hex.to_string()))?;
    Ok(format!("{:08x}", n << 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_standard_vectors() {
        assert_eq!(
            sha256(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_crypto_hash_decodes_hex_first() {
        assert_eq!(crypto_hash("616263").unwrap(), sha256(b"abc"));
        assert_eq!(crypto_hash("").unwrap(), sha256(b""));
        assert_eq!(
            crypto_hash("00").unwrap().to_hex(),
            "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d"
        );
    }

    #[test]
    fn test_crypto_hash_rejects_invalid_hex() {
        assert!(matches!(crypto_hash("0g"), Err(EncodingError::InvalidHex(_))));
        assert!(matches!(crypto_hash("000"), Err(EncodingError::InvalidHex(_))));
    }

    #[test]
    fn test_hash_hex_roundtrip() {
        let h = sha256(b"test data");
        let parsed = Hash::from_hex(&h.to_hex()).unwrap();
        assert_eq!(h, parsed);
        assert_eq!(h.to_hex_string().as_str(), h.to_hex());
        assert_eq!(h.to_hex_string().byte_len(), 32);
        assert!(matches!(
            Hash::from_hex("00000000"),
            Err(EncodingError::LengthMismatch { expected: 32, actual: 4 })
        ));
    }

    #[test]
    fn test_toy_mix() {
        assert_eq!(toy_mix("deb0bef2").unwrap(), "f585f790");
        assert_eq!(toy_mix("00000001").unwrap(), "00000008");
        assert_eq!(toy_mix("ffffffff").unwrap(), "fffffff8");
        assert_eq!(toy_mix("20000000").unwrap(), "00000000");
    }

    #[test]
    fn test_toy_mix_uses_low_32_bits() {
        assert_eq!(toy_mix("00f585f790").unwrap(), "ac2fbc80");
        assert_eq!(toy_mix("ff00f585f790").unwrap(), "ac2fbc80");
        assert_eq!(toy_mix("1").unwrap(), "00000008");
    }

    #[test]
    fn test_toy_mix_rejects_invalid_hex() {
        assert!(matches!(toy_mix(""), Err(EncodingError::InvalidHex(_))));
        assert!(matches!(toy_mix("+1"), Err(EncodingError::InvalidHex(_))));
    }
}
