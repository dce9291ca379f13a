//! Mapping between board-local pointer coordinates and cells.
//!
//! The board is a square of side `size` with its origin at the top-left
//! corner and y growing downwards. Each cell is `size / 3` wide.

use crate::position::Position;
use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length used by the launcher's board.
pub const DEFAULT_BOARD_SIZE: f64 = 330.0;

/// Glyph inset from the cell border, as a fraction of the cell size.
const CROSS_PADDING: f64 = 0.2;

/// Ring radius as a fraction of the cell size.
const RING_RADIUS: f64 = 0.4;

/// A point in board-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start of the stroke.
    pub from: Point,
    /// End of the stroke.
    pub to: Point,
}

/// Drawing primitives for a symbol inside one cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Glyph {
    /// Two diagonal strokes, used for `First`.
    Cross([Segment; 2]),
    /// A circle outline, used for `Second`.
    Ring {
        /// Center of the circle.
        center: Point,
        /// Radius of the circle.
        radius: f64,
    },
}

/// Pure coordinate transforms for a square board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    size: f64,
}

impl BoardGeometry {
    /// Creates a geometry for a board of side `size`.
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// Side length of the board.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Side length of one cell.
    pub fn cell_size(&self) -> f64 {
        self.size / 3.0
    }

    /// Maps a pointer position to the cell under it.
    ///
    /// Returns `None` when either coordinate falls outside `[0, size)` or is
    /// not finite; coordinates are never clamped onto the board.
    #[instrument]
    pub fn pointer_to_cell(&self, x: f64, y: f64) -> Option<Position> {
        let on_board = |v: f64| v.is_finite() && v >= 0.0 && v < self.size;
        if !on_board(x) || !on_board(y) {
            return None;
        }
        // x just below size can divide out to exactly 3.0
        let col = ((x / self.cell_size()).floor() as usize).min(2);
        let row = ((y / self.cell_size()).floor() as usize).min(2);
        Position::from_row_col(row, col)
    }

    /// Top-left corner of a cell.
    pub fn cell_to_origin(&self, pos: Position) -> (f64, f64) {
        let cell = self.cell_size();
        (pos.col() as f64 * cell, pos.row() as f64 * cell)
    }

    /// Center of a cell.
    pub fn cell_center(&self, pos: Position) -> Point {
        let (x, y) = self.cell_to_origin(pos);
        let half = self.cell_size() / 2.0;
        Point {
            x: x + half,
            y: y + half,
        }
    }

    /// Primitives for drawing `symbol` in the cell at `pos`.
    pub fn glyph(&self, pos: Position, symbol: Symbol) -> Glyph {
        let cell = self.cell_size();
        let (x, y) = self.cell_to_origin(pos);
        match symbol {
            Symbol::First => {
                let pad = cell * CROSS_PADDING;
                let near = |v: f64| v + pad;
                let far = |v: f64| v + cell - pad;
                Glyph::Cross([
                    Segment {
                        from: Point { x: near(x), y: near(y) },
                        to: Point { x: far(x), y: far(y) },
                    },
                    Segment {
                        from: Point { x: far(x), y: near(y) },
                        to: Point { x: near(x), y: far(y) },
                    },
                ])
            }
            Symbol::Second => Glyph::Ring {
                center: self.cell_center(pos),
                radius: cell * RING_RADIUS,
            },
        }
    }

    /// The two inner vertical and two inner horizontal grid lines.
    pub fn grid_lines(&self) -> [Segment; 4] {
        let cell = self.cell_size();
        let vertical = |i: f64| Segment {
            from: Point { x: i * cell, y: 0.0 },
            to: Point { x: i * cell, y: self.size },
        };
        let horizontal = |i: f64| Segment {
            from: Point { x: 0.0, y: i * cell },
            to: Point { x: self.size, y: i * cell },
        };
        [vertical(1.0), vertical(2.0), horizontal(1.0), horizontal(2.0)]
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_round_trip() {
        let geometry = BoardGeometry::new(330.0);
        for pos in Position::ALL {
            let (x, y) = geometry.cell_to_origin(pos);
            assert_eq!(geometry.pointer_to_cell(x, y), Some(pos));
        }
    }

    #[test]
    fn test_origins_for_330() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.cell_to_origin(Position::TopLeft), (0.0, 0.0));
        assert_eq!(geometry.cell_to_origin(Position::Center), (110.0, 110.0));
        assert_eq!(geometry.cell_to_origin(Position::BottomLeft), (0.0, 220.0));
    }

    #[test]
    fn test_pointer_inside_cells() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.pointer_to_cell(109.9, 0.0), Some(Position::TopLeft));
        assert_eq!(geometry.pointer_to_cell(110.0, 0.0), Some(Position::TopCenter));
        assert_eq!(geometry.pointer_to_cell(329.9, 329.9), Some(Position::BottomRight));
        assert_eq!(geometry.pointer_to_cell(50.0, 150.0), Some(Position::MiddleLeft));
    }

    #[test]
    fn test_pointer_just_below_size_maps_to_last_cell() {
        for size in [1.0_f64, 1000.0] {
            let geometry = BoardGeometry::new(size);
            let edge = f64::from_bits(size.to_bits() - 1);
            assert_eq!(geometry.pointer_to_cell(edge, 0.0), Some(Position::TopRight));
            assert_eq!(geometry.pointer_to_cell(0.0, edge), Some(Position::BottomLeft));
            assert_eq!(geometry.pointer_to_cell(edge, edge), Some(Position::BottomRight));
            assert_eq!(geometry.pointer_to_cell(size, 0.0), None);
        }
    }

    #[test]
    fn test_pointer_off_board_not_clamped() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.pointer_to_cell(330.0, 10.0), None);
        assert_eq!(geometry.pointer_to_cell(10.0, 330.0), None);
        assert_eq!(geometry.pointer_to_cell(-0.1, 10.0), None);
        assert_eq!(geometry.pointer_to_cell(f64::NAN, 10.0), None);
    }

    #[test]
    fn test_cross_is_inset() {
        let geometry = BoardGeometry::default();
        let Glyph::Cross([a, b]) = geometry.glyph(Position::TopLeft, Symbol::First) else {
            panic!("expected cross");
        };
        assert_eq!(a.from, Point { x: 22.0, y: 22.0 });
        assert_eq!(a.to, Point { x: 88.0, y: 88.0 });
        assert_eq!(b.from, Point { x: 88.0, y: 22.0 });
        assert_eq!(b.to, Point { x: 22.0, y: 88.0 });
    }

    #[test]
    fn test_ring_is_centered() {
        let geometry = BoardGeometry::default();
        let glyph = geometry.glyph(Position::Center, Symbol::Second);
        assert_eq!(
            glyph,
            Glyph::Ring {
                center: Point { x: 165.0, y: 165.0 },
                radius: 44.0,
            }
        );
    }

    #[test]
    fn test_grid_lines() {
        let lines = BoardGeometry::default().grid_lines();
        assert_eq!(lines[0].from, Point { x: 110.0, y: 0.0 });
        assert_eq!(lines[1].to, Point { x: 220.0, y: 330.0 });
        assert_eq!(lines[3].from, Point { x: 0.0, y: 220.0 });
    }
}
