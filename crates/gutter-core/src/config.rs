//! Gutter configuration.
//!
//! Hosts typically keep this next to their other editor settings, e.g.:
//!
//! ```toml
//! mode = "hybrid"
//! unsigned_relative = true
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a [`GutterConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config text is not valid TOML, or does not match the expected schema.
    #[error("Invalid gutter config: {reason}")]
    Parse {
        /// Parse error details.
        reason: String,
    },
}

/// How gutter line numbers are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineNumberMode {
    /// One-based logical line numbers on every row.
    #[default]
    Absolute,
    /// Visible-row distance from the caret on every row (`0` on the caret row).
    Relative,
    /// Absolute number on the caret line, relative distance elsewhere.
    Hybrid,
}

/// Line-number gutter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GutterConfig {
    /// Numbering mode.
    pub mode: LineNumberMode,
    /// Render relative distances without a sign (`3` instead of `-3`).
    pub unsigned_relative: bool,
}

impl Default for GutterConfig {
    fn default() -> Self {
        Self {
            mode: LineNumberMode::Absolute,
            unsigned_relative: true,
        }
    }
}

impl GutterConfig {
    /// Create a config for a mode, keeping the other settings at their defaults.
    pub fn with_mode(mode: LineNumberMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Parse a config from TOML. Missing fields fall back to [`GutterConfig::default`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|err| ConfigError::Parse {
            reason: err.to_string(),
        })?;
        tracing::debug!(
            mode = ?config.mode,
            unsigned_relative = config.unsigned_relative,
            "loaded gutter config"
        );
        Ok(config)
    }
}
