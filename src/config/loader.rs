//! `config.toml` loading and the defaults → file → env → CLI resolution chain.

use crate::view_state::size_cache::FixedExtents;
use crate::view_state::grouped_list::DEFAULT_OVERSCAN;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TLV_CONFIG";

/// Environment variable overriding the overscan margin.
pub const OVERSCAN_ENV_VAR: &str = "TLV_OVERSCAN";

/// Failures while locating, reading or validating the config file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config location could not be determined (e.g. an empty `TLV_CONFIG`).
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// The file exists but reading it failed.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        path: PathBuf,
        reason: String,
    },

    /// Not valid TOML, or a key this version does not know.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        path: PathBuf,
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        reason: String,
    },
}

/// On-disk config. Every key is optional; absent keys fall back to defaults.
///
/// Read from `~/.config/tlv/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rows occupied by a group header.
    #[serde(default)]
    pub header_extent: Option<u32>,

    /// Rows occupied by a transcript row.
    #[serde(default)]
    pub row_extent: Option<u32>,

    /// Items rendered beyond each viewport edge.
    #[serde(default)]
    pub overscan: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Effective settings once every source has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub header_extent: u32,
    pub row_extent: u32,
    pub overscan: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let extents = FixedExtents::default();
        Self {
            header_extent: extents.header.get(),
            row_extent: extents.row.get(),
            overscan: DEFAULT_OVERSCAN,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Item extents for the list engine.
    pub fn layout(&self) -> FixedExtents {
        FixedExtents::new(self.header_extent, self.row_extent)
    }

    /// Reject values the terminal host cannot render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [("header_extent", self.header_extent), ("row_extent", self.row_extent)] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Where logs go when `log_file_path` is not configured: `<state dir>/tlv/tlv.log`
/// (`~/.local/state` on Linux), else `tlv.log` in the working directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tlv").join("tlv.log")
    } else {
        PathBuf::from("tlv.log")
    }
}

/// Parse the config at `path`. A missing file is `Ok(None)`.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// `<config dir>/tlv/config.toml`, or `None` when the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tlv").join("config.toml"))
}

/// Pick and parse the config file.
///
/// First match wins:
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `TLV_CONFIG` environment variable
/// 3. Default path `~/.config/tlv/config.toml`
///
/// Whichever source is chosen, a missing file means defaults.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV_VAR} is set but empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TLV_OVERSCAN`: Override overscan (ignored with a warning if not a number)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(OVERSCAN_ENV_VAR) {
        match raw.trim().parse() {
            Ok(overscan) => config.overscan = overscan,
            Err(e) => warn!(value = %raw, error = %e, "ignoring {}", OVERSCAN_ENV_VAR),
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        header_extent: config.header_extent.unwrap_or(defaults.header_extent),
        row_extent: config.row_extent.unwrap_or(defaults.row_extent),
        overscan: config.overscan.unwrap_or(defaults.overscan),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overscan_override: Option<usize>) -> ResolvedConfig {
    if let Some(overscan) = overscan_override {
        config.overscan = overscan;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
