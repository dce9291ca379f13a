//! Headless sessions driven by recorded pointer clicks.

use crate::config::LauncherConfig;
use derive_more::{Display, Error};
use gamedeck_tictactoe::{BoardGeometry, EngineEvent, EventLog, Outcome, Symbol, TurnController};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::str::FromStr;
use tracing::{info, instrument};

/// A pointer activation in board-local coordinates, written `x,y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// A click that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid click '{}': expected x,y", input)]
pub struct ClickParseError {
    /// The rejected text.
    pub input: String,
}

impl FromStr for Click {
    type Err = ClickParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ClickParseError {
            input: s.to_string(),
        };
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Click { x, y })
    }
}

/// Result of a headless session.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    /// Everything the engine emitted, in order.
    pub events: Vec<EngineEvent>,
    /// Outcome after the last click.
    pub outcome: Outcome,
    /// Number of clicks the engine accepted.
    pub accepted: usize,
}

/// Starts a game as `human` and feeds it `clicks`, one at a time.
///
/// Clicks after the game ends are ignored like any other invalid move.
#[instrument(skip(config, clicks), fields(clicks = clicks.len()))]
pub fn replay(config: &LauncherConfig, human: Symbol, clicks: &[Click]) -> Replay {
    let rng = match config.bot_seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };
    let mut game = TurnController::new(
        BoardGeometry::new(*config.board_size()),
        EventLog::new(),
        rng,
    );

    game.start(human);
    let accepted = clicks
        .iter()
        .filter(|click| game.cell_activated(click.x, click.y))
        .count();
    game.teardown();

    let outcome = game
        .adapter()
        .events()
        .iter()
        .find_map(|event| match event {
            EngineEvent::Outcome { outcome } => Some(*outcome),
            _ => None,
        })
        .unwrap_or(Outcome::Undecided);
    info!(accepted, %outcome, "Replay finished");

    Replay {
        events: game.adapter_mut().drain(),
        outcome,
        accepted,
    }
}
