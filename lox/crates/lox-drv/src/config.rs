//! Configuration for the lox driver.
//!
//! Settings come from a `lox.toml` file. Every field is optional; a missing
//! file means all defaults.

use std::path::{Path, PathBuf};

use dirs::{config_dir, data_local_dir};
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lox.toml";

/// File name of the interactive history.
pub const HISTORY_FILE_NAME: &str = "history.txt";

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Print the token stream after each scan.
    #[serde(default = "default_true")]
    pub print_tokens: bool,

    /// Interactive prompt string.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Keep interactive history across sessions.
    #[serde(default = "default_true")]
    pub history: bool,

    /// Maximum number of history entries.
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_max_history() -> usize {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            print_tokens: true,
            prompt: default_prompt(),
            history: true,
            max_history: default_max_history(),
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Searches the current directory, then `<config dir>/lox/`. Returns
    /// the defaults if neither holds a config file.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// A path that does not exist is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DriverError::Config(format!("failed to parse configuration: {}", e)))
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            DriverError::Config(format!("failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Location of the interactive history file, if history is enabled and
    /// a data directory exists.
    pub fn history_path(&self) -> Option<PathBuf> {
        if !self.history {
            return None;
        }
        data_local_dir().map(|dir| dir.join("lox").join(HISTORY_FILE_NAME))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lox").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}
