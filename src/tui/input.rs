//! Terminal input translation.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Converts a terminal cell to board-local coordinates.
///
/// `area` is the screen region the board of side `size` is painted in.
/// The center of the terminal cell is used, so a click lands inside the
/// board cell it visually covers. Clicks outside `area` produce coordinates
/// outside `[0, size)`, which the engine rejects.
pub fn board_local(area: Rect, column: u16, row: u16, size: f64) -> (f64, f64) {
    let scale = |pos: u16, start: u16, extent: u16| {
        (f64::from(pos) - f64::from(start) + 0.5) * size / f64::from(extent.max(1))
    };
    (
        scale(column, area.x, area.width),
        scale(row, area.y, area.height),
    )
}

/// Left-button press position, if this is one.
pub fn left_click(event: &MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}

/// Board index for the digit keys 1-9.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .map(|d| d as usize - 1),
        _ => None,
    }
}
