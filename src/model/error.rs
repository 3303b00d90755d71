//! Error taxonomy for the dropgrid application shell.
//!
//! The engine itself has no fatal errors: malformed virtual ids, unresolvable
//! containers, and degenerate gestures all degrade to "leave the tree as it
//! was", because a corrupted drag gesture must never corrupt the content
//! tree. The errors here belong to the impure shell — loading trees and
//! config, initializing logging, and talking to the terminal — and compose
//! into [`AppError`] via `From` so `?` propagates cleanly.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error for the demo editor.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be loaded or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber setup failed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Tree file could not be loaded or saved.
    #[error("Tree file error: {0}")]
    TreeFile(#[from] TreeFileError),

    /// Terminal or rendering failure from the crossterm/ratatui layer.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered loading or saving the tree JSON file.
///
/// Loading validates the committed-tree invariant (no empty groups) so a
/// hand-edited file cannot smuggle an invalid tree past the engine.
#[derive(Debug, Error)]
pub enum TreeFileError {
    /// The given tree file does not exist.
    #[error("Tree file not found: {path}")]
    NotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The file exists but is not valid tree JSON.
    #[error("Malformed tree file {path}: {reason}")]
    Malformed {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parser error detail.
        reason: String,
    },

    /// The file parsed but violates the no-empty-group invariant.
    #[error("Tree file {path} contains empty group '{group_id}'")]
    EmptyGroup {
        /// Path of the offending file.
        path: PathBuf,
        /// Id of the group with zero columns.
        group_id: String,
    },

    /// Generic I/O failure reading or writing the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
