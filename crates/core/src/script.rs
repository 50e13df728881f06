//! Mnemonic lock/unlock scripts and their hex encoding.
//!
//! A script is a whitespace-separated list of tokens. Known mnemonics map to a
//! one-byte opcode; anything else must already be hex (for example an embedded
//! public key hash) and is copied through unchanged.

use crate::codec::HexString;
use crate::error::Result;
use std::fmt;

/// Opcodes understood by the script encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `OP_0` / `OP_FALSE`
    False = 0x00,
    Duplicate = 0x76,
    EqualVerify = 0x88,
    Hash160 = 0xa9,
    CheckSignature = 0xac,
}

impl Opcode {
    /// Look up a mnemonic.
    pub fn from_mnemonic(s: &str) -> Option<Self> {
        match s {
            "OP_0" | "OP_FALSE" => Some(Opcode::False),
            "OP_DUPLICATE" => Some(Opcode::Duplicate),
            "OP_EQUAL_VERIFY" => Some(Opcode::EqualVerify),
            "OP_HASH_160" => Some(Opcode::Hash160),
            "OP_CHECK_SIGNATURE" => Some(Opcode::CheckSignature),
            _ => None,
        }
    }

    /// Canonical mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::False => "OP_0",
            Opcode::Duplicate => "OP_DUPLICATE",
            Opcode::EqualVerify => "OP_EQUAL_VERIFY",
            Opcode::Hash160 => "OP_HASH_160",
            Opcode::CheckSignature => "OP_CHECK_SIGNATURE",
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// A single script token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptToken {
    Op(Opcode),
    /// Literal data, already hex.
    Literal(HexString),
}

impl ScriptToken {
    /// Parse one whitespace-free token.
    pub fn parse(token: &str) -> Result<Self> {
        match Opcode::from_mnemonic(token) {
            Some(op) => Ok(ScriptToken::Op(op)),
            None => Ok(ScriptToken::Literal(HexString::new(token)?)),
        }
    }

    fn write_hex(&self, out: &mut String) {
        match self {
            ScriptToken::Op(op) => out.push_str(&format!("{:02x}", op.code())),
            ScriptToken::Literal(hex) => out.push_str(hex.as_str()),
        }
    }
}

impl fmt::Display for ScriptToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptToken::Op(op) => f.write_str(op.mnemonic()),
            ScriptToken::Literal(hex) => write!(f, "{}", hex),
        }
    }
}

/// Split a mnemonic script into tokens.
pub fn parse_script(script: &str) -> Result<Vec<ScriptToken>> {
    script.split_whitespace().map(ScriptToken::parse).collect()
}

/// Encode a mnemonic script as hex. `None` encodes as the empty string.
pub fn script_to_hex(script: Option<&str>) -> Result<String> {
    let Some(script) = script else {
        return Ok(String::new());
    };

    let mut out = String::with_capacity(script.len());
    for token in parse_script(script)? {
        token.write_hex(&mut out);
    }
    Ok(out)
}
