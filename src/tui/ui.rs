//! Stateless UI rendering for the launcher.

use super::app::{App, Screen};
use gamedeck_tictactoe::{Glyph, Outcome, Point, Symbol, rules};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph,
        canvas::{Canvas, Circle, Context, Line as Stroke},
    },
};

/// Renders the current screen and returns where the board was painted.
pub fn draw(frame: &mut Frame, app: &App) -> Option<Rect> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let header = Paragraph::new("Gamedeck")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.screen() {
        Screen::Catalog => {
            draw_catalog(frame, chunks[1], app);
            draw_status(frame, chunks[2], "Up/Down to choose, Enter to open, q to quit");
            None
        }
        Screen::Game => {
            let board_area = draw_game(frame, chunks[1], app);
            draw_status(frame, chunks[2], &app.status());
            Some(board_area)
        }
    }
}

fn draw_catalog(frame: &mut Frame, area: Rect, app: &App) {
    if app.catalog().is_empty() {
        let empty = Paragraph::new("empty")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .catalog()
        .entries()
        .iter()
        .map(|entry| ListItem::new(entry.title().as_str()))
        .collect();
    let list = List::new(items)
        .block(Block::default().title("Games").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.selected()));

    let preview = app
        .catalog()
        .entries()
        .get(app.selected())
        .map(|entry| entry.asset_path(app.asset_dir()).display().to_string())
        .unwrap_or_default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    frame.render_stateful_widget(list, chunks[0], &mut state);
    frame.render_widget(
        Paragraph::new(format!("Preview: {}", preview)).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}

/// Draws the board (and the symbol menu when no game is running).
fn draw_game(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let (board_block, menu_area) = if app.menu_visible() {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(24)])
            .split(area);
        (split[0], Some(split[1]))
    } else {
        (area, None)
    };

    let (outer, inner) = board_rects(board_block);
    let block = Block::default().title("Tic-Tac-Toe").borders(Borders::ALL);

    let adapter = app.game().adapter();
    let geometry = *adapter.geometry();
    let size = geometry.size();
    let highlight = app
        .game()
        .board()
        .zip(app.game().outcome().winner())
        .and_then(|(board, winner)| rules::winning_pattern(board, winner));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, size])
        .y_bounds([0.0, size])
        .paint(|ctx| {
            for segment in geometry.grid_lines() {
                stroke(ctx, size, segment.from, segment.to, Color::Gray);
            }
            for (symbol, glyph) in adapter.glyphs() {
                paint_glyph(ctx, size, *symbol, glyph);
            }
            if let Some([first, _, last]) = highlight {
                let from = geometry.cell_center(first);
                let to = geometry.cell_center(last);
                stroke(ctx, size, from, to, Color::Yellow);
            }
        });
    frame.render_widget(canvas, outer);

    if let Some(menu_area) = menu_area {
        draw_menu(frame, menu_area, app);
    }

    inner
}

fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let option = |symbol: Symbol, key: char| {
        let mark = if app.symbol() == symbol { "(*)" } else { "( )" };
        Line::from(format!("{} {}  [{}]", mark, symbol, key))
    };

    let mut lines = Vec::new();
    if let Some(result) = outcome_line(app.game().outcome()) {
        lines.push(Line::from(Span::styled(
            result,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from("Select symbol:"));
    lines.push(option(Symbol::First, 'x'));
    lines.push(option(Symbol::Second, 'o'));
    lines.push(Line::from(""));
    lines.push(Line::from("[s] start"));

    let menu = Paragraph::new(lines).block(Block::default().title("Menu").borders(Borders::ALL));
    frame.render_widget(menu, area);
}

/// Result line shown above the symbol menu after a game.
fn outcome_line(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::Won(winner) => Some(format!("Winner: {}!", winner)),
        Outcome::Draw => Some("Draw!".to_string()),
        Outcome::Undecided => None,
    }
}

fn draw_status(frame: &mut Frame, area: Rect, status: &str) {
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, area);
}

fn paint_glyph(ctx: &mut Context<'_>, size: f64, symbol: Symbol, glyph: &Glyph) {
    let color = match symbol {
        Symbol::First => Color::Green,
        Symbol::Second => Color::Red,
    };
    match glyph {
        Glyph::Cross(segments) => {
            for segment in segments {
                stroke(ctx, size, segment.from, segment.to, color);
            }
        }
        Glyph::Ring { center, radius } => ctx.draw(&Circle {
            x: center.x,
            y: size - center.y,
            radius: *radius,
            color,
        }),
    }
}

/// Board y grows downwards, canvas y grows upwards.
fn stroke(ctx: &mut Context<'_>, size: f64, from: Point, to: Point, color: Color) {
    ctx.draw(&Stroke::new(from.x, size - from.y, to.x, size - to.y, color));
}

/// Outer board rect and the canvas area inside its border.
fn board_rects(area: Rect) -> (Rect, Rect) {
    let outer = square_rect(area);
    let inner = Block::default().borders(Borders::ALL).inner(outer);
    (outer, inner)
}

/// Largest area that looks square, given terminal cells about twice as tall as wide.
fn square_rect(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
