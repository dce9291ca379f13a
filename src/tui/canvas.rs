//! Render adapter that keeps the drawing primitives for the terminal canvas.

use gamedeck_tictactoe::{BoardGeometry, Glyph, Outcome, Position, RenderAdapter, Symbol};
use tracing::{debug, instrument, warn};

/// Glyphs placed so far, in board-local coordinates.
///
/// Painted on a ratatui canvas each frame; the engine never reads it.
#[derive(Debug, Clone)]
pub struct CanvasAdapter {
    geometry: BoardGeometry,
    glyphs: Vec<(Symbol, Glyph)>,
    outcome: Option<Outcome>,
    active: bool,
}

impl CanvasAdapter {
    /// Creates an adapter drawing on a board described by `geometry`.
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            glyphs: Vec::new(),
            outcome: None,
            active: false,
        }
    }

    /// Geometry the glyphs were computed with.
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Glyphs to paint, oldest first.
    pub fn glyphs(&self) -> &[(Symbol, Glyph)] {
        &self.glyphs
    }

    /// Last reported outcome, until the next reset.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True between a reset and the next teardown.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl RenderAdapter for CanvasAdapter {
    #[instrument(skip(self))]
    fn symbol_drawn(&mut self, row: usize, col: usize, symbol: Symbol) {
        match Position::from_row_col(row, col) {
            Some(pos) => {
                self.glyphs.push((symbol, self.geometry.glyph(pos, symbol)));
                debug!(glyphs = self.glyphs.len(), "Glyph added");
            }
            None => warn!("Draw instruction outside the board"),
        }
    }

    fn outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    fn reset(&mut self) {
        self.glyphs.clear();
        self.outcome = None;
        self.active = true;
    }

    fn teardown(&mut self) {
        debug!(glyphs = self.glyphs.len(), "Releasing canvas glyphs");
        self.glyphs = Vec::new();
        self.outcome = None;
        self.active = false;
    }
}
