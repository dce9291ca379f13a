//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark. `First` always moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Displayed as X.
    #[display("X")]
    #[serde(alias = "x", alias = "X")]
    #[strum(serialize = "x", serialize = "first")]
    First,
    /// Displayed as O.
    #[display("O")]
    #[serde(alias = "o", alias = "O")]
    #[strum(serialize = "o", serialize = "second")]
    Second,
}

impl Symbol {
    /// Returns the opposing symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::First => Symbol::Second,
            Symbol::Second => Symbol::First,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a symbol.
    Occupied(Symbol),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if the cell at `index` is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.squares.get(index), Some(Square::Empty))
    }

    /// Places `symbol` at `index`.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] if `index` is outside 0-8,
    /// [`MoveError::CellOccupied`] if the cell already holds a symbol.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, symbol: Symbol) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.is_empty(index) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.squares[index] = Square::Occupied(symbol);
        Ok(pos)
    }

    /// Checks if no empty cells remain.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(symbol))
            .count()
    }

    /// Whoever has fewer symbols on the board moves next; ties favor `First`.
    pub fn to_move(&self) -> Symbol {
        if self.count(Symbol::First) > self.count(Symbol::Second) {
            Symbol::Second
        } else {
            Symbol::First
        }
    }

    /// First-count minus Second-count is 0 or 1.
    pub fn is_balanced(&self) -> bool {
        let first = self.count(Symbol::First);
        let second = self.count(Symbol::Second);
        first == second || first == second + 1
    }

    /// Empty cells in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(pos.to_index()))
            .collect()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(symbol) => write!(f, "{}", symbol)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Result of evaluating a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    Undecided,
    /// Game ended in a win.
    Won(Symbol),
    /// Board is full and nobody won.
    Draw,
}

impl Outcome {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Won(symbol) => Some(*symbol),
            Outcome::Undecided | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "In progress"),
            Outcome::Won(symbol) => write!(f, "{} wins", symbol),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_place_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Symbol::First), Err(MoveError::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new();
        board.place(4, Symbol::First).unwrap();
        assert_eq!(
            board.place(4, Symbol::Second),
            Err(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(board.count(Symbol::Second), 0);
    }

    #[test]
    fn test_is_empty_by_index() {
        let mut board = Board::new();
        board.place(2, Symbol::Second).unwrap();
        assert!(!board.is_empty(2));
        assert!(board.is_empty(3));
        assert!(!board.is_empty(9));
        assert_eq!(board.empty_positions().len(), 8);
    }

    #[test]
    fn test_to_move_alternates() {
        let mut board = Board::new();
        assert_eq!(board.to_move(), Symbol::First);
        board.place(0, Symbol::First).unwrap();
        assert_eq!(board.to_move(), Symbol::Second);
        board.place(1, Symbol::Second).unwrap();
        assert_eq!(board.to_move(), Symbol::First);
        assert!(board.is_balanced());
    }

    #[test]
    fn test_unbalanced_board_detected() {
        let mut board = Board::new();
        board.place(0, Symbol::Second).unwrap();
        assert!(!board.is_balanced());
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new();
        board.place(0, Symbol::First).unwrap();
        board.place(4, Symbol::Second).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_symbol_parsing() {
        assert_eq!(Symbol::from_str("x"), Ok(Symbol::First));
        assert_eq!(Symbol::from_str("O"), Ok(Symbol::Second));
        assert_eq!(Symbol::from_str("Second"), Ok(Symbol::Second));
        assert!(Symbol::from_str("z").is_err());
    }
}
