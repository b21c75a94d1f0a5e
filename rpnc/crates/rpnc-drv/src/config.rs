//! Configuration module for the rpnc driver.
//!
//! Settings come from an optional `rpnc.toml`; command-line flags override
//! them afterwards.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dirs::config_dir;
use serde::Deserialize;
use tracing::debug;

use rpnc_util::DEFAULT_TAB_WIDTH;

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "rpnc.toml";

/// What the driver prints for each translated line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Emit {
    /// The postfix record, lexemes separated by spaces
    #[default]
    Postfix,
    /// The raw token stream, whitespace included
    Tokens,
}

/// Driver configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Width of a tab stop when computing columns.
    #[serde(default = "default_tab_width")]
    pub tab_width: u32,

    /// Output form.
    #[serde(default)]
    pub emit: Emit,

    /// Log filter used when neither `--verbose` nor `RPNC_LOG` is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether diagnostics carry the line:column locator and source snippet.
    #[serde(default = "default_true")]
    pub show_positions: bool,
}

fn default_tab_width() -> u32 {
    DEFAULT_TAB_WIDTH
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            emit: Emit::default(),
            log_level: default_log_level(),
            show_positions: true,
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Searches for `rpnc.toml` in the current directory, then in the user's
    /// configuration directory. Returns the defaults if neither exists.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.tab_width == 0 {
            return Err(DriverError::Config(
                "tab_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("rpnc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}
