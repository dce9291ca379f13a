//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Square, Symbol};
use tracing::instrument;

/// The eight lines of three: rows, columns, diagonals.
pub static WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line fully held by `symbol`, if any.
#[instrument(skip(board))]
pub fn winning_pattern(board: &Board, symbol: Symbol) -> Option<[Position; 3]> {
    let mark = Square::Occupied(symbol);
    WIN_PATTERNS
        .iter()
        .copied()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Checks whether `symbol` holds three in a row.
pub fn is_winning_line(board: &Board, symbol: Symbol) -> bool {
    winning_pattern(board, symbol).is_some()
}
