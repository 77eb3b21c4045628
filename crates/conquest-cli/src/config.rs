//! Configuration file loading.
//!
//! Settings live in a small TOML file (`conquest.toml` by default). Every key
//! is optional and a missing file means "use the defaults".

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Game settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Where games are saved and restored from.
    /// Defaults to "savegame.dat" in the working directory.
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,
    /// Delay between characters of menu text, in milliseconds. 0 prints
    /// text at once. Defaults to 15.
    #[serde(default = "default_text_delay_ms")]
    pub text_delay_ms: u64,
    /// Whether to clear the terminal between screens. Defaults to true.
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

fn default_save_path() -> PathBuf {
    PathBuf::from("savegame.dat")
}

fn default_text_delay_ms() -> u64 {
    15
}

fn default_clear_screen() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            save_path: default_save_path(),
            text_delay_ms: default_text_delay_ms(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl GameConfig {
    /// Loads the configuration at `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `conquest.toml` in the
    /// working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("conquest.toml")
    }

    /// Returns the typewriter delay.
    pub fn text_delay(&self) -> Duration {
        Duration::from_millis(self.text_delay_ms)
    }
}
