//! caesar CLI entry point.

use clap::Parser;

mod commands;
mod config;
mod logging;

use config::{Config, LogArgs};

#[derive(Parser)]
#[command(name = "caesar")]
#[command(about = "Canonical encoding, hashing and address tools for the caesar ledger", long_about = None)]
struct Cli {
    #[command(flatten)]
    log: LogArgs,

    #[command(subcommand)]
    command: Option<commands::Commands>,
}

fn main() {
    let cli = Cli::parse();

    let setup = Config::from_args(&cli.log).and_then(|config| logging::init(&config));
    if let Err(e) = setup {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    match cli.command {
        Some(cmd) => {
            if let Err(e) = commands::run(cmd) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("caesar - canonical encoding and hashing for a toy ledger");
            println!("Run 'caesar --help' for usage information.");
        }
    }
}
