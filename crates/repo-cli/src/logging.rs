//! Log output to the console and the append-only log file

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Install the global subscriber.
///
/// Everything goes to stderr and, when it can be opened, to `log_path`
/// without ANSI colors. The level is `info`, or `debug` when `verbose`;
/// `RUST_LOG` overrides both. Fails if a subscriber is already installed.
pub fn init(verbose: bool, log_path: &Path) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CliError::user(format!("invalid log filter: {e}")))?;

    let (log_file, open_error) = match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(file) => (Some(file), None),
        Err(e) => (None, Some(e)),
    };

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let file_layer = log_file.map(|file| {
        fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::user(format!("logging already initialized: {e}")))?;

    if let Some(e) = open_error {
        tracing::warn!(path = %log_path.display(), error = %e, "Could not open log file, logging to console only");
    }
    tracing::debug!("Verbose mode enabled");
    Ok(())
}
