//! Gamedeck - Unified CLI
//!
//! Game launcher with a tic-tac-toe board, in the terminal or headless.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use gamedeck::cli::{Cli, Command};
use gamedeck::{CatalogEntry, Click, GameCatalog, LauncherConfig, replay};
use gamedeck_tictactoe::Symbol;
use tracing::{info, instrument, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = LauncherConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play { symbol, seed } => run_play(config.with_overrides(symbol, seed)),
        Command::Replay {
            symbol,
            seed,
            json,
            clicks,
        } => {
            initialize_tracing();
            run_replay(config.with_overrides(symbol, seed), &clicks, json)
        }
        Command::Catalog => {
            initialize_tracing();
            run_catalog(&config)
        }
    }
}

/// Run the terminal launcher
fn run_play(config: LauncherConfig) -> Result<()> {
    gamedeck::tui::init_logging(&config)?;
    let catalog = load_catalog(&config);
    gamedeck::tui::run(&config, catalog)
}

/// Play one game from recorded clicks and print what the engine emitted
#[instrument(skip(config, clicks), fields(clicks = clicks.len()))]
fn run_replay(config: LauncherConfig, clicks: &[Click], json: bool) -> Result<()> {
    let human: Symbol = *config.human_symbol();
    let result = replay(&config, human, clicks);

    for event in &result.events {
        if json {
            println!("{}", serde_json::to_string(event)?);
        } else {
            println!("{}", event);
        }
    }
    println!(
        "Outcome: {} ({} of {} clicks accepted)",
        result.outcome,
        result.accepted,
        clicks.len()
    );
    Ok(())
}

/// List catalog entries with their preview images
fn run_catalog(config: &LauncherConfig) -> Result<()> {
    let catalog = GameCatalog::from_file(config.catalog_path())?;
    for entry in catalog.entries() {
        println!(
            "{}\t{}",
            entry.title(),
            entry.asset_path(config.asset_dir()).display()
        );
    }
    Ok(())
}

/// Loads the catalog for the launcher, falling back to the built-in game.
#[instrument(skip(config), fields(path = %config.catalog_path().display()))]
fn load_catalog(config: &LauncherConfig) -> GameCatalog {
    match GameCatalog::from_file(config.catalog_path()) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(error = %e, "Catalog unavailable, listing tic-tac-toe only");
            GameCatalog::new(vec![CatalogEntry::new("Tic-Tac-Toe", "tic-tac-toe")])
        }
    }
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gamedeck=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
