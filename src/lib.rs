//! Gamedeck library - a small game launcher around a tic-tac-toe board
//!
//! The rules, turn handling and bot live in `gamedeck_tictactoe`; this crate
//! wires them to configuration, a game catalog and a terminal front-end.
//!
//! # Architecture
//!
//! - **Config**: TOML launcher settings with defaults for every field
//! - **Catalog**: JSON list of games and their preview images
//! - **Headless**: feed pointer clicks to the engine and collect its events
//! - **TUI**: ratatui launcher with a mouse-driven board
//!
//! # Example
//!
//! ```
//! use gamedeck::{Click, LauncherConfig, replay};
//! use gamedeck_tictactoe::Symbol;
//!
//! let config = LauncherConfig::default().with_bot_seed(7);
//! let result = replay(&config, Symbol::First, &[Click { x: 165.0, y: 165.0 }]);
//! assert_eq!(result.accepted, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod config;
mod headless;

pub mod cli;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, LauncherConfig};

// Crate-level exports - Catalog
pub use catalog::{CatalogEntry, CatalogError, GameCatalog};

// Crate-level exports - Headless play
pub use headless::{Click, ClickParseError, Replay, replay};
