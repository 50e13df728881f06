//! Secret key and address commands.

use anyhow::{Context, Result};
use caesar_core::SecretKey;
use clap::Args;
use colored::Colorize;
use tracing::{debug, info};

#[derive(Args)]
pub struct SecretKeyArgs {
    /// Generate a 4 byte development key instead of a 32 byte one
    #[arg(long)]
    toy: bool,
}

#[derive(Args)]
pub struct AddressArgs {
    /// Secret key (hex format)
    secret_key: String,
}

pub fn run_secret_key(args: SecretKeyArgs) -> Result<()> {
    let secret_key = if args.toy {
        SecretKey::generate_toy()
    } else {
        SecretKey::generate()
    };
    info!(bytes = secret_key.byte_len(), "generated secret key");

    println!("{}", secret_key.as_hex());
    Ok(())
}

/// Everything derived from one secret key.
#[derive(Debug)]
pub struct Derived {
    pub public_key: String,
    pub public_key_hash: String,
    pub address: String,
}

pub fn run_address(args: AddressArgs) -> Result<()> {
    let derived = derive_address(&args.secret_key)?;

    println!();
    println!("  Public Key:      {}", derived.public_key.bright_black());
    println!("  Public Key Hash: {}", derived.public_key_hash.bright_black());
    println!("  Address:         {}", derived.address.bright_yellow());
    println!();

    Ok(())
}

/// Derive the public key, its hash and the address for a hex secret key.
pub fn derive_address(secret_key: &str) -> Result<Derived> {
    let secret_key = SecretKey::from_hex(secret_key)
        .with_context(|| format!("Invalid secret key: {}", secret_key))?;
    let public_key = secret_key.public_key();
    let public_key_hash = public_key.hash()?;
    let address = public_key.to_address()?;
    debug!(%public_key, %public_key_hash, "derived keys");

    Ok(Derived {
        public_key: public_key.to_hex(),
        public_key_hash,
        address: address.to_string(),
    })
}
