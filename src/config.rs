//! Launcher configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gamedeck_tictactoe::{DEFAULT_BOARD_SIZE, Symbol};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the launcher and the tic-tac-toe board, loaded from TOML.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Side length of the board in board-local units.
    #[serde(default = "default_board_size")]
    board_size: f64,

    /// Symbol the human plays unless overridden on the command line.
    #[serde(default = "default_human_symbol")]
    human_symbol: Symbol,

    /// Fixed seed for the bot; a fresh seed per run when absent.
    #[serde(default)]
    bot_seed: Option<u64>,

    /// JSON file listing the games shown in the launcher.
    #[serde(default = "default_catalog_path")]
    catalog_path: PathBuf,

    /// Directory holding the `<image>.svg` previews.
    #[serde(default = "default_asset_dir")]
    asset_dir: PathBuf,

    /// Log destination while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_board_size() -> f64 {
    DEFAULT_BOARD_SIZE
}

fn default_human_symbol() -> Symbol {
    Symbol::First
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/game-general-info.json")
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("assets/preview")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("gamedeck_tui.log")
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            human_symbol: default_human_symbol(),
            bot_seed: None,
            catalog_path: default_catalog_path(),
            asset_dir: default_asset_dir(),
            log_file: default_log_file(),
        }
    }
}

impl LauncherConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(board_size = config.board_size, human = %config.human_symbol, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Rejects settings the board cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.board_size.is_finite() || self.board_size <= 0.0 {
            return Err(ConfigError::new(format!(
                "board_size must be a positive number, got {}",
                self.board_size
            )));
        }
        Ok(())
    }

    /// Overrides the human's symbol.
    pub fn with_human_symbol(mut self, symbol: Symbol) -> Self {
        self.human_symbol = symbol;
        self
    }

    /// Overrides the bot seed.
    pub fn with_bot_seed(mut self, seed: u64) -> Self {
        self.bot_seed = Some(seed);
        self
    }

    /// Applies command-line choices on top of the file.
    pub fn with_overrides(self, symbol: Option<Symbol>, seed: Option<u64>) -> Self {
        let config = match symbol {
            Some(symbol) => self.with_human_symbol(symbol),
            None => self,
        };
        match seed {
            Some(seed) => config.with_bot_seed(seed),
            None => config,
        }
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
