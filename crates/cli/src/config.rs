//! Runtime configuration built from the global command-line flags.

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Log level names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            // tracing has no level above ERROR
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

/// Logging flags shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Sets log level to 'debug'. This overrides --log-level
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Prepend a timestamp to each log line
    #[arg(long, global = true)]
    pub log_timestamp: bool,

    /// Save log output to a file
    #[arg(long, global = true)]
    pub log_to_file: bool,

    /// The file that log output will be written to
    #[arg(long, default_value = DEFAULT_LOG_FILE, global = true)]
    pub log_file: PathBuf,
}

/// Validated, immutable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LogLevel,
    pub debug: bool,
    pub log_timestamp: bool,
    pub log_to_file: bool,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            debug: false,
            log_timestamp: false,
            log_to_file: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Build a config from parsed command-line flags.
    pub fn from_args(args: &LogArgs) -> Result<Self> {
        if args.log_to_file && args.log_file.is_dir() {
            bail!(
                "Log file path '{}' is a directory, expected a file",
                args.log_file.display()
            );
        }

        Ok(Self {
            log_level: args.log_level,
            debug: args.debug,
            log_timestamp: args.log_timestamp,
            log_to_file: args.log_to_file,
            log_file: args.log_file.clone(),
        })
    }

    /// The level to log at, with `debug` taking precedence.
    pub fn level_filter(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::DEBUG
        } else {
            self.log_level.to_level_filter()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        log: LogArgs,
    }

    fn parse(args: &[&str]) -> Config {
        let cli = TestCli::parse_from(std::iter::once("caesar").chain(args.iter().copied()));
        Config::from_args(&cli.log).unwrap()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&[]), Config::default());
        assert_eq!(Config::default().level_filter(), LevelFilter::INFO);
    }

    #[test]
    fn test_debug_overrides_level() {
        let config = parse(&["--log-level", "error", "-d"]);
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_critical_maps_to_error() {
        let config = parse(&["--log-level", "critical"]);
        assert_eq!(config.level_filter(), LevelFilter::ERROR);
    }

    #[test]
    fn test_log_file_must_not_be_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cli = TestCli::parse_from([
            "caesar",
            "--log-to-file",
            "--log-file",
            dir.path().to_str().unwrap(),
        ]);
        assert!(Config::from_args(&cli.log).is_err());
    }
}
