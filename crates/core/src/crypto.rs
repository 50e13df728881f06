//! Toy key and address derivation.
//!
//! secret key → public key → public key hash → address. None of these steps
//! is cryptographically secure; they only exercise the hex and hash
//! primitives deterministically.

use crate::codec::HexString;
use crate::error::EncodingError;
use crate::hash::toy_mix;
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Byte length of a generated secret key.
pub const SECRET_KEY_LEN: usize = 32;

/// Byte length of a toy (development) secret key.
pub const TOY_SECRET_KEY_LEN: usize = 4;

/// Constant added to the secret key to form the public key.
pub const PUBLIC_KEY_OFFSET: u32 = 0xdead_beef;

/// Network version byte mixed into every address.
pub const NETWORK_VERSION: &str = "00";

/// Scheme tag every address starts with.
pub const ADDRESS_PREFIX: &str = "csr_";

/// Errors that can occur during key and address operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("invalid secret key")]
    InvalidSecretKey,
    #[error("invalid public key: {0:?}")]
    InvalidPublicKey(String),
    #[error("invalid address format: {0:?}")]
    InvalidAddress(String),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// A secret key of arbitrary (non-zero) byte length.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(HexString);

impl SecretKey {
    /// Generate a new random 32 byte secret key.
    pub fn generate() -> Self {
        Self::random(SECRET_KEY_LEN)
    }

    /// Generate a random 4 byte key for development use.
    pub fn generate_toy() -> Self {
        Self::random(TOY_SECRET_KEY_LEN)
    }

    fn random(len: usize) -> Self {
        let mut bytes = vec![0u8; len];
        OsRng.fill_bytes(&mut bytes);
        Self(HexString::from_bytes(&bytes))
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let hex = HexString::new(s).map_err(|_| CryptoError::InvalidSecretKey)?;
        if hex.is_empty() {
            return Err(CryptoError::InvalidSecretKey);
        }
        Ok(Self(hex))
    }

    pub fn as_hex(&self) -> &HexString {
        &self.0
    }

    pub fn byte_len(&self) -> usize {
        self.0.byte_len()
    }

    /// `(secret + 0xdeadbeef) mod 2^32`.
    pub fn public_key(&self) -> PublicKey {
        let hex = self.0.as_str();
        let tail = &hex[hex.len().saturating_sub(8)..];
        // Charset was checked on construction.
        let low = u32::from_str_radix(tail, 16).unwrap_or_default();
        PublicKey(low.wrapping_add(PUBLIC_KEY_OFFSET))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({} bytes)", self.byte_len())
    }
}

/// A 4 byte public key, always rendered as 8 hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(u32);

impl PublicKey {
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let hex = HexString::with_length(s, 4).map_err(|_| CryptoError::InvalidPublicKey(s.to_string()))?;
        u32::from_str_radix(hex.as_str(), 16)
            .map(Self)
            .map_err(|_| CryptoError::InvalidPublicKey(s.to_string()))
    }

    pub fn to_hex(&self) -> String {
        format!("{:08x}", self.0)
    }

    /// Toy hash of the public key (8 hex digits).
    pub fn hash(&self) -> Result<String, CryptoError> {
        Ok(toy_mix(&self.to_hex())?)
    }

    /// Derive the address for this public key.
    pub fn to_address(&self) -> Result<Address, CryptoError> {
        let pk_hash = self.hash()?;
        let mixed = toy_mix(&format!("{}{}", NETWORK_VERSION, pk_hash))?;
        let address = Address(format!("{}{}", ADDRESS_PREFIX, mixed));
        debug!(public_key = %self, %address, "derived address");
        Ok(address)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// An address: `csr_` followed by 8 lowercase hex digits.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(ADDRESS_PREFIX)
            .ok_or_else(|| CryptoError::InvalidAddress(s.to_string()))?;
        let well_formed = digits.len() == 8
            && digits
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        if !well_formed {
            return Err(CryptoError::InvalidAddress(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Public key for a hex secret key.
pub fn secret_key_to_public_key(secret_key: &str) -> Result<String, CryptoError> {
    Ok(SecretKey::from_hex(secret_key)?.public_key().to_hex())
}

/// Toy hash of a hex public key.
pub fn public_key_hash(public_key: &str) -> Result<String, CryptoError> {
    PublicKey::from_hex(public_key)?.hash()
}

/// Address for a hex public key.
pub fn public_key_to_address(public_key: &str) -> Result<Address, CryptoError> {
    PublicKey::from_hex(public_key)?.to_address()
}
