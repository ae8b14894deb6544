//! Logging initialization

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize logging
///
/// `RUST_LOG` wins over everything. Otherwise `debug` raises the level to
/// debug and `level` (from the config) applies. Logs go to stderr so command
/// output on stdout stays clean, or to `log_file` without ANSI codes.
pub fn init_logging(debug: bool, level: &str, log_file: Option<&Path>) -> Result<()> {
    let default_level = if debug { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_writer(file)
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    Ok(())
}
