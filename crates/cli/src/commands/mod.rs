//! CLI commands module.

use anyhow::Result;
use clap::Subcommand;

mod address;
mod encode;
mod genesis;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the genesis block and its encoding
    Genesis(genesis::GenesisArgs),
    /// Generate a new secret key
    SecretKey(address::SecretKeyArgs),
    /// Derive the public key, public key hash and address for a secret key
    Address(address::AddressArgs),
    /// Encode an entity from a JSON file
    Encode(encode::EncodeArgs),
}

pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Genesis(args) => genesis::run(args),
        Commands::SecretKey(args) => address::run_secret_key(args),
        Commands::Address(args) => address::run_address(args),
        Commands::Encode(args) => encode::run(args),
    }
}
