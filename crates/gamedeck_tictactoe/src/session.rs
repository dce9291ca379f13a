//! State of one game, from `start` to the next `start`.

use crate::action::Move;
use crate::types::{Board, Outcome, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A single game against the bot.
///
/// Owned by the controller; a fresh session replaces the old one on every
/// start and nothing survives it.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Undecided until a line or a full board ends the game.
    outcome: Outcome,
    /// Symbol chosen by the person at the board.
    human: Symbol,
    /// Number of accepted moves.
    move_count: usize,
    /// Accepted moves in order.
    history: Vec<Move>,
}

impl GameSession {
    /// Creates an empty session; its existence is what makes a game started.
    #[instrument]
    pub fn new(human: Symbol) -> Self {
        info!(%human, "Creating game session");
        Self {
            board: Board::new(),
            outcome: Outcome::Undecided,
            human,
            move_count: 0,
            history: Vec::new(),
        }
    }

    /// Symbol played by the bot.
    pub fn bot(&self) -> Symbol {
        self.human.opponent()
    }

    /// True once the outcome is `Won` or `Draw`.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn record(&mut self, mv: Move, outcome: Outcome) {
        self.history.push(mv);
        self.move_count += 1;
        self.outcome = outcome;
    }
}
