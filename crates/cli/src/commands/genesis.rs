//! Genesis block command.

use anyhow::{Context, Result};
use caesar_chain::Node;
use caesar_core::json::{pretty, JsonSerializable};
use clap::Args;
use colored::Colorize;
use serde_json::json;
use tracing::debug;

#[derive(Args)]
pub struct GenesisArgs {
    /// Print a single JSON document instead of labelled sections
    #[arg(long)]
    json: bool,
}

pub fn run(args: GenesisArgs) -> Result<()> {
    let node = Node::new().context("Failed to process the genesis block")?;
    let block = node.tip();
    debug!(height = node.height(), "loaded genesis block");

    let hex_values = block.hex_values()?.to_json();
    let hex = block.hex()?;
    let hash = node.tip_hash();

    if args.json {
        let doc = json!({
            "block": block.to_json()?,
            "hex_values": hex_values,
            "hex": hex,
            "hash": hash.to_hex(),
        });
        println!("{}", pretty(&doc)?);
        return Ok(());
    }

    println!("{}", "Genesis block:".bold().cyan());
    println!("{}", block.text()?);
    println!();
    println!("{}", "Hex values:".bold().cyan());
    println!("{}", pretty(&hex_values)?);
    println!();
    println!("{}  {}", "Hex: ".bold(), hex.bright_black());
    println!("{}  {}", "Hash:".bold(), hash.to_hex().bright_yellow());

    Ok(())
}
