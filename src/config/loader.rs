//! Configuration file loading with precedence handling.
//!
//! Precedence, lowest to highest: hardcoded defaults → config file →
//! environment variables → CLI flags.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read an explicitly requested config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to defaults.
/// Corresponds to `~/.config/dropgrid/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to the tracing log file.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Save the tree after every committed drag.
    #[serde(default)]
    pub autosave: Option<bool>,

    /// Disable colored output.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Custom key bindings (reserved for future use).
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Path to the tracing log file.
    pub log_file_path: PathBuf,
    /// Save the tree after every committed drag.
    pub autosave: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_file_path: default_log_path(),
            autosave: false,
            no_color: false,
        }
    }
}

/// Platform-appropriate default log path
/// (`~/.local/state/dropgrid/dropgrid.log` on Unix-like systems), falling
/// back to the current directory when no state dir exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("dropgrid").join("dropgrid.log")
    } else {
        PathBuf::from("dropgrid.log")
    }
}

/// Default config file location (`~/.config/dropgrid/config.toml`), if a
/// config dir exists on this platform.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dropgrid").join("config.toml"))
}

/// Load a config file from a specific path.
///
/// Returns `Ok(None)` when the file doesn't exist (use defaults); `Err`
/// when it exists but cannot be read or parsed.
pub fn load_config_file(path: &PathBuf) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let parsed = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    Ok(Some(parsed))
}

/// Load the config file with path precedence: an explicit `--config` path
/// first, then the default location, then none.
pub fn load_config_with_precedence(
    explicit: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = explicit {
        return load_config_file(&path);
    }
    match default_config_path() {
        Some(path) => load_config_file(&path),
        None => Ok(None),
    }
}

/// Merge a loaded config file over the hardcoded defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    match file {
        Some(file) => ResolvedConfig {
            log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
            autosave: file.autosave.unwrap_or(defaults.autosave),
            no_color: file.no_color.unwrap_or(defaults.no_color),
        },
        None => defaults,
    }
}

/// Apply environment variable overrides (`DROPGRID_LOG` for the log path).
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var("DROPGRID_LOG") {
        if !path.is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }
    config
}

/// Apply CLI flag overrides; flags only override when explicitly set.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    no_color: Option<bool>,
    autosave: Option<bool>,
) -> ResolvedConfig {
    if let Some(no_color) = no_color {
        config.no_color = no_color;
    }
    if let Some(autosave) = autosave {
        config.autosave = autosave;
    }
    config
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
