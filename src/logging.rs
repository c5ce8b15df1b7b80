//! Tracing subscriber setup

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `level`. With a `log_file`, output goes there
/// without ANSI colors. Otherwise line modes log to stderr, and the TUI
/// (`interactive`) logs nowhere so the alternate screen stays clean.
///
/// # Errors
///
/// Returns an error if the filter is invalid, the log file cannot be created,
/// or a subscriber is already installed.
pub fn init(level: &str, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level '{level}'"))?;

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("could not create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            )
            .try_init()?;
    } else if !interactive {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}
