//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_history::SortOrder;
use tracing::{debug, info, instrument};

/// Settings for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Initial move-list order.
    #[serde(default)]
    sort_order: SortOrder,

    /// Whether to highlight the winning line.
    #[serde(default = "default_highlight_winning_line")]
    highlight_winning_line: bool,

    /// Where logs are written; the terminal itself belongs to the UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_highlight_winning_line() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_history.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            highlight_winning_line: default_highlight_winning_line(),
            log_file: default_log_file(),
        }
    }
}

impl TuiConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(sort_order = %config.sort_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given and present, otherwise returns defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                info!("Config file not found at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Replaces the initial sort order.
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(TuiConfig::from_toml("").unwrap(), TuiConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = TuiConfig::from_toml("sort_order = \"descending\"\n").unwrap();
        assert_eq!(*config.sort_order(), SortOrder::Descending);
        assert!(*config.highlight_winning_line());
        assert_eq!(config.log_file(), &default_log_file());
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let err = TuiConfig::from_toml("highlight_winning_line = \"yes\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = Path::new("/nonexistent/tictactoe_history.toml");
        assert_eq!(TuiConfig::load(Some(path)).unwrap(), TuiConfig::default());
    }
}
