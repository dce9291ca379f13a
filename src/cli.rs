//! Command-line interface for gamedeck.

use crate::headless::Click;
use clap::{Parser, Subcommand};
use gamedeck_tictactoe::Symbol;

/// Gamedeck - game launcher with a tic-tac-toe board
#[derive(Parser, Debug)]
#[command(name = "gamedeck")]
#[command(about = "Game launcher with a tic-tac-toe board and a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the launcher configuration file
    #[arg(short, long, global = true, default_value = "gamedeck.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the launcher in the terminal (mouse or keys 1-9 to play)
    Play {
        /// Symbol to play: x moves first, o lets the bot open
        #[arg(short, long)]
        symbol: Option<Symbol>,

        /// Seed for the bot's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play one game headless from pointer clicks and print the engine events
    Replay {
        /// Symbol to play
        #[arg(short, long)]
        symbol: Option<Symbol>,

        /// Seed for the bot's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print events as JSON lines
        #[arg(long)]
        json: bool,

        /// Board-local clicks, each written x,y
        #[arg(required = true, allow_hyphen_values = true)]
        clicks: Vec<Click>,
    },

    /// List the games in the catalog with their preview paths
    Catalog,
}
