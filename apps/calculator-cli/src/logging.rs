//! Logging initialization for the command-line host.
//!
//! Logs go to stderr so that stdout carries only command output.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LogLevel, LoggingConfig};

/// Level implied by `-v` flags, falling back to the configured level.
#[must_use]
pub fn effective_level(cfg: &LoggingConfig, verbose: u8) -> LogLevel {
    match verbose {
        0 => cfg.level,
        1 => LogLevel::Info,
        2 => LogLevel::Debug,
        _ => LogLevel::Trace,
    }
}

/// Install the global subscriber. `RUST_LOG` wins over config and flags.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(effective_level(cfg, verbose).as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
