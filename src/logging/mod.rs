//! Tracing subscriber initialization.
//!
//! The TUI owns stdout, so logs go to a file; monitor them with `tail -f`
//! in a second terminal. `RUST_LOG` is respected and defaults to `info`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create the log directory.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable filename component.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A tracing subscriber is already installed.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize file-based tracing at `log_path`, creating the parent
/// directory when missing.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let directory = log_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
