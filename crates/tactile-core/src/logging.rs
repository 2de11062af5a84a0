//! File-backed `tracing` setup.
//!
//! A terminal UI owns stdout, so log output goes to a file instead.  The
//! filter comes from the `TACTILE_LOG` environment variable using
//! `tracing-subscriber`'s env-filter syntax (e.g. `tactile_widgets=trace`).

use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "TACTILE_LOG";

const DEFAULT_FILTER: &str = "info";

/// Errors raised while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file could not be opened.
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    /// A global subscriber is already installed.
    #[error("a tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Install a global fmt subscriber that appends to `path`.
///
/// Returns [`LoggingError::AlreadyInstalled`] when called twice in the same
/// process.
pub fn init_file_logging(path: impl AsRef<Path>) -> Result<(), LoggingError> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
