//! Application state and logic.

use super::canvas::CanvasAdapter;
use super::input::{board_local, digit_cell, left_click};
use crate::catalog::GameCatalog;
use crossterm::event::{KeyCode, MouseEvent};
use gamedeck_tictactoe::{BoardGeometry, MoveSource, Phase, Symbol, TurnController};
use rand::rngs::StdRng;
use ratatui::layout::Rect;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The list of games.
    Catalog,
    /// The tic-tac-toe board, opened from the list.
    Game,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    catalog: GameCatalog,
    asset_dir: PathBuf,
    selected: usize,
    screen: Screen,
    symbol: Symbol,
    game: TurnController<CanvasAdapter, StdRng>,
    board_area: Option<Rect>,
    quit: bool,
}

impl App {
    /// Creates the application showing the catalog.
    pub fn new(catalog: GameCatalog, geometry: BoardGeometry, symbol: Symbol, rng: StdRng) -> Self {
        Self {
            catalog,
            asset_dir: PathBuf::new(),
            selected: 0,
            screen: Screen::Catalog,
            symbol,
            game: TurnController::new(geometry, CanvasAdapter::new(geometry), rng),
            board_area: None,
            quit: false,
        }
    }

    /// Resolves catalog previews against `asset_dir`.
    pub fn with_asset_dir(mut self, asset_dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = asset_dir.into();
        self
    }

    /// Directory the preview images live in.
    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    /// The catalog being listed.
    pub fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }

    /// Highlighted catalog row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Current view.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Symbol the next game starts with.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The game controller.
    pub fn game(&self) -> &TurnController<CanvasAdapter, StdRng> {
        &self.game
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Remembers where the board was painted so clicks can be mapped.
    pub fn set_board_area(&mut self, area: Option<Rect>) {
        self.board_area = area;
    }

    /// The symbol menu is shown whenever no game is being played.
    pub fn menu_visible(&self) -> bool {
        self.game.phase() != Phase::InProgress
    }

    /// Status line for the game view.
    pub fn status(&self) -> String {
        match self.game.phase() {
            Phase::NotStarted => "Select a symbol and press 's' to start".to_string(),
            Phase::InProgress => format!(
                "You play {}. Click a cell or press 1-9. Esc closes the board.",
                self.symbol
            ),
            Phase::Terminal(outcome) => match outcome.winner() {
                Some(winner) => format!("Winner: {}! Press 's' to play again.", winner),
                None => "Draw! Press 's' to play again.".to_string(),
            },
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if key == KeyCode::Char('q') {
            info!("User quit");
            self.game.teardown();
            self.quit = true;
            return;
        }

        match self.screen {
            Screen::Catalog => self.handle_catalog_key(key),
            Screen::Game => self.handle_game_key(key),
        }
    }

    fn handle_catalog_key(&mut self, key: KeyCode) {
        let last = self.catalog.len().saturating_sub(1);
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Enter if !self.catalog.is_empty() => {
                info!(entry = self.selected, "Opening game");
                self.screen = Screen::Game;
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                info!("Closing game view");
                self.game.teardown();
                self.board_area = None;
                self.screen = Screen::Catalog;
            }
            KeyCode::Char('x') | KeyCode::Char('X') if self.menu_visible() => {
                self.symbol = Symbol::First;
            }
            KeyCode::Char('o') | KeyCode::Char('O') if self.menu_visible() => {
                self.symbol = Symbol::Second;
            }
            KeyCode::Char('s') if self.menu_visible() => self.game.start(self.symbol),
            key => {
                if let Some(index) = digit_cell(key) {
                    self.game.submit_move(index, MoveSource::Human);
                }
            }
        }
    }

    /// Handles a mouse event; only left clicks on the game view matter.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.screen != Screen::Game {
            return;
        }
        let (Some((column, row)), Some(area)) = (left_click(&event), self.board_area) else {
            return;
        };
        let (x, y) = board_local(area, column, row, self.game.geometry().size());
        let accepted = self.game.cell_activated(x, y);
        debug!(x, y, accepted, "Board click");
    }
}
