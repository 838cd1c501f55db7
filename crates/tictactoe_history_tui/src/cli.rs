//! Command-line interface.

use crate::config::{ConfigError, TuiConfig};
use clap::Parser;
use std::path::PathBuf;
use tictactoe_history::SortOrder;
use tracing::instrument;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults apply if it does not exist)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial move-list order: ascending or descending
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file, then applies command-line overrides.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = TuiConfig::load(self.config.as_deref())?;
        if let Some(sort) = self.sort {
            config = config.with_sort_order(sort);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let cli = Cli::try_parse_from(["tictactoe_history"]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(*config.sort_order(), SortOrder::Ascending);
        assert!(*config.highlight_winning_line());
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::try_parse_from([
            "tictactoe_history",
            "--sort",
            "descending",
            "--log-file",
            "/tmp/ttt.log",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(*config.sort_order(), SortOrder::Descending);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        assert!(Cli::try_parse_from(["tictactoe_history", "--sort", "sideways"]).is_err());
    }
}
