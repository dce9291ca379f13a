//! Move vocabulary: who moved, where, and why a move was refused.

use crate::position::Position;
use crate::types::Symbol;
use serde::{Deserialize, Serialize};

/// Origin of a move submitted to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveSource {
    /// A pointer click or key press from the person at the board.
    Human,
    /// The synthetic opponent.
    Bot,
}

/// A move that was accepted and applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol that was placed.
    pub symbol: Symbol,
    /// Where it was placed.
    pub position: Position,
    /// Who asked for it.
    pub source: MoveSource,
}

impl Move {
    /// Creates a new move.
    pub fn new(symbol: Symbol, position: Position, source: MoveSource) -> Self {
        Self {
            symbol,
            position,
            source,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.symbol, self.source, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// Pointer coordinates fall outside the board.
    #[display("Pointer at ({}, {}) is outside the board", x, y)]
    OffBoard {
        /// Board-local x coordinate.
        x: f64,
        /// Board-local y coordinate.
        y: f64,
    },

    /// The cell already holds a symbol.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// No game is in progress.
    #[display("No game in progress")]
    NotInProgress,

    /// The bot was asked to move on a full board.
    #[display("No moves available for the bot")]
    NoMovesAvailable,
}

impl MoveError {
    /// True for the errors caused by a stray or duplicate click.
    ///
    /// These are ignored by the controller; anything else is a bug.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            MoveError::OutOfRange(_) | MoveError::OffBoard { .. } | MoveError::CellOccupied(_)
        )
    }
}
