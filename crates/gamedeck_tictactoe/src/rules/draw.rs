//! Draw detection logic for tic-tac-toe.

use crate::types::Board;

/// No cell left to play; a draw unless the last move completed a line.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
