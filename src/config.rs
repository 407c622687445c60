//! CLI defaults for invisitext.
//!
//! Loaded from `~/.invisitext/config.toml` (or an explicit path). Every field
//! is optional; command-line flags override whatever the file says.
//! Passphrases are never read from or written to this file.
//!
//! ```toml
//! [encode]
//! mode = "grapheme-aware"
//! compress = true
//!
//! [decode]
//! mode = "auto"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decoder::DecoderConfig;
use crate::encoder::EncoderConfig;

/// Errors that can occur when loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

/// Settings file contents.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub encode: EncoderConfig,
    pub decode: DecoderConfig,
}

impl Settings {
    /// Loads the default settings file, or defaults if it (or the home
    /// directory) doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let Ok(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads settings from `path`. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Path of the default settings file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(".invisitext").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }
}
