// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Support configuration loaded from TOML and the environment.
//!
//! ```toml
//! [output]
//! show = false
//! override_force = false
//!
//! [banner]
//! border_char = "*"
//! separator_char = "-"
//! ```

use crate::banner::{Banner, BannerBuilder, DEFAULT_BORDER_CHAR, DEFAULT_SEPARATOR_CHAR};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

fn default_border_char() -> char {
    DEFAULT_BORDER_CHAR
}

fn default_separator_char() -> char {
    DEFAULT_SEPARATOR_CHAR
}

/// Top-level support configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SupportConfig {
    /// Output gating flags
    #[serde(default)]
    pub output: OutputConfig,

    /// Defaults for banners printed by the facade
    #[serde(default)]
    pub banner: BannerConfig,
}

/// Output gating flags
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Print at all (default: false, quiet)
    #[serde(default)]
    pub show: bool,

    /// Ignore requests from tests to force output on
    #[serde(default)]
    pub override_force: bool,
}

/// Banner character defaults
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BannerConfig {
    #[serde(default = "default_border_char")]
    pub border_char: char,

    #[serde(default = "default_separator_char")]
    pub separator_char: char,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            border_char: default_border_char(),
            separator_char: default_separator_char(),
        }
    }
}

impl BannerConfig {
    /// Banner builder preloaded with these characters
    pub fn builder(&self) -> BannerBuilder {
        Banner::builder()
            .border_char(self.border_char)
            .separator_char(self.separator_char)
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {field}: {value:?} is not a printable single-column character")]
    InvalidChar { field: &'static str, value: char },
}

impl SupportConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load the file named by `UNITKIT_CONFIG` (or defaults), then apply
    /// environment flag overrides.
    pub fn resolve() -> Result<Self, ConfigError> {
        let config = match crate::env::config_path() {
            Some(path) => {
                log::debug!("loading support config from {}", path.display());
                Self::load(&path)?
            }
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Apply `UNITKIT_SHOW_OUTPUT` and `UNITKIT_OVERRIDE_FORCE_OUTPUT`
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(show) = crate::env::show_output() {
            self.output.show = show;
        }
        if let Some(override_force) = crate::env::override_force_output() {
            self.output.override_force = override_force;
        }
        self
    }

    /// Check banner characters are printable and one column wide
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("banner.border_char", self.banner.border_char),
            ("banner.separator_char", self.banner.separator_char),
        ] {
            if value.is_control() || value.width() != Some(1) {
                return Err(ConfigError::InvalidChar { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
