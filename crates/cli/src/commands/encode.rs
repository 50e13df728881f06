//! Encode entity JSON files.

use anyhow::{Context, Result};
use caesar_core::json::JsonSerializable;
use caesar_core::{Block, Hash, Input, Output, Transaction};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which entity a JSON file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Block,
    Transaction,
    Input,
    Output,
}

#[derive(Args)]
pub struct EncodeArgs {
    /// JSON file holding the entity
    file: PathBuf,

    /// Entity type stored in the file
    #[arg(short, long, value_enum, default_value_t = EntityKind::Block)]
    kind: EntityKind,
}

/// Canonical hex of an entity, plus its hash where it has one.
#[derive(Debug)]
pub struct Encoded {
    pub hex: String,
    pub hash: Option<Hash>,
}

pub fn run(args: EncodeArgs) -> Result<()> {
    let encoded = encode_file(&args.file, args.kind)?;

    println!("{}  {}", "Hex: ".bold(), encoded.hex.bright_black());
    if let Some(hash) = encoded.hash {
        println!("{}  {}", "Hash:".bold(), hash.to_hex().bright_yellow());
    }
    Ok(())
}

/// Load an entity of the given kind from `path` and encode it.
pub fn encode_file(path: &Path, kind: EntityKind) -> Result<Encoded> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read entity file: {}", path.display()))?;
    debug!(path = %path.display(), ?kind, "encoding entity");

    let encoded = match kind {
        EntityKind::Block => {
            let block = Block::from_text(&contents)?;
            Encoded {
                hex: block.hex()?,
                hash: Some(block.hash()?),
            }
        }
        EntityKind::Transaction => {
            let tx = Transaction::from_text(&contents)?;
            Encoded {
                hex: tx.hex()?,
                hash: Some(tx.hash()?),
            }
        }
        EntityKind::Input => Encoded {
            hex: Input::from_text(&contents)?.hex()?,
            hash: None,
        },
        EntityKind::Output => Encoded {
            hex: Output::from_text(&contents)?.hex()?,
            hash: None,
        },
    };
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use caesar_core::genesis::genesis_block_json;
    use caesar_core::GENESIS_HASH;
    use std::io::Write;

    fn write_json(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_encode_genesis_file() {
        let file = write_json(&genesis_block_json().to_string());
        let encoded = encode_file(file.path(), EntityKind::Block).unwrap();
        assert_eq!(encoded.hash.unwrap().to_hex(), GENESIS_HASH);
    }

    #[test]
    fn test_encode_output_file() {
        let file = write_json(r#"{"value": 42, "lock_script": "OP_0"}"#);
        let encoded = encode_file(file.path(), EntityKind::Output).unwrap();
        assert_eq!(encoded.hex, "012a0100");
        assert!(encoded.hash.is_none());
    }

    #[test]
    fn test_encode_reports_incomplete_entity() {
        let file = write_json(r#"{"value": 42}"#);
        let err = encode_file(file.path(), EntityKind::Output).unwrap_err();
        assert!(err.to_string().contains("lock_script"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(encode_file(&missing, EntityKind::Block).is_err());
    }
}
