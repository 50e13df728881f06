//! Installs the global tracing subscriber.

use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Install a fmt subscriber writing to stderr, or appending to the log file.
pub fn init(config: &Config) -> Result<()> {
    let writer = if config.log_to_file {
        if let Some(parent) = config.log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .with_context(|| format!("Failed to open log file: {}", config.log_file.display()))?;
        BoxMakeWriter::new(Mutex::new(file))
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    let builder = tracing_subscriber::fmt()
        .with_max_level(config.level_filter())
        .with_ansi(!config.log_to_file)
        .with_writer(writer);

    let installed = if config.log_timestamp {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };
    installed.map_err(|e| anyhow!("Failed to install logger: {}", e))
}
