//! Configuration file loading with precedence handling.
//!
//! Resolution order, first to last: hardcoded defaults, config file,
//! environment variables, CLI arguments.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

/// Environment variable overriding the log file path.
pub const ENV_LOG_FILE: &str = "SCROLLBACK_LOG_FILE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to hardcoded defaults.
/// Lives at `~/.config/scrollback/config.toml` unless overridden.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Show timestamp prefixes on startup.
    #[serde(default)]
    pub show_timestamps: Option<bool>,

    /// Path for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Foreground color name for painted cells.
    #[serde(default)]
    pub foreground: Option<String>,

    /// Background color name for painted cells.
    #[serde(default)]
    pub background: Option<String>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Show timestamp prefixes on startup.
    pub show_timestamps: bool,

    /// Path for tracing output.
    pub log_file_path: PathBuf,

    /// Foreground color name for painted cells.
    pub foreground: Option<String>,

    /// Background color name for painted cells.
    pub background: Option<String>,
}

/// CLI arguments that override file and environment settings.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// `--no-timestamps`: start with timestamps hidden.
    pub no_timestamps: bool,

    /// `--log-file`: tracing output path.
    pub log_file: Option<PathBuf>,

    /// `--fg`: foreground color name.
    pub foreground: Option<String>,

    /// `--bg`: background color name.
    pub background: Option<String>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scrollback/config.toml"))
}

fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("scrollback/scrollback.log")
}

/// Load the config file, explicit path first.
///
/// An explicit path must exist and parse; the default path is optional and
/// its absence yields `Ok(None)`, but a present-yet-broken default file is
/// still an error rather than a silent fallback.
pub fn load_config_file(explicit: Option<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = match explicit {
        Some(path) => path,
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(None),
        },
    };

    let contents = std::fs::read_to_string(&path).map_err(|err| ConfigError::ReadError {
        path: path.clone(),
        reason: err.to_string(),
    })?;

    toml::from_str(&contents)
        .map(Some)
        .map_err(|err| ConfigError::ParseError {
            path,
            reason: err.to_string(),
        })
}

/// Merge an optional config file with hardcoded defaults.
pub fn resolve(file: Option<ConfigFile>) -> Config {
    let file = file.unwrap_or_default();
    Config {
        show_timestamps: file.show_timestamps.unwrap_or(true),
        log_file_path: file.log_file_path.unwrap_or_else(default_log_path),
        foreground: file.foreground,
        background: file.background,
    }
}

/// Apply environment variable overrides.
pub fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(path) = std::env::var(ENV_LOG_FILE) {
        if !path.is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }
    config
}

/// Apply CLI argument overrides (highest precedence).
pub fn apply_cli_overrides(mut config: Config, cli: CliOverrides) -> Config {
    if cli.no_timestamps {
        config.show_timestamps = false;
    }
    if let Some(path) = cli.log_file {
        config.log_file_path = path;
    }
    if cli.foreground.is_some() {
        config.foreground = cli.foreground;
    }
    if cli.background.is_some() {
        config.background = cli.background;
    }
    config
}
