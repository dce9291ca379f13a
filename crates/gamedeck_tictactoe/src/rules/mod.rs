//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The controller calls [`evaluate`]
//! after every placement; front-ends may call [`winning_pattern`] to
//! highlight the line that ended the game.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_PATTERNS, is_winning_line, winning_pattern};

use crate::types::{Board, Outcome, Symbol};
use tracing::instrument;

/// Determines the outcome after `just_moved` placed a symbol.
///
/// Only `just_moved` is checked for a line: a move cannot complete a line
/// for the other side. A win on the last empty cell is a win, not a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, just_moved: Symbol) -> Outcome {
    if is_winning_line(board, just_moved) {
        Outcome::Won(just_moved)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}
