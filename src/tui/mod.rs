//! Terminal UI for Gamedeck

mod app;
mod canvas;
mod input;
mod ui;

pub use app::{App, Screen};
pub use canvas::CanvasAdapter;

use crate::catalog::GameCatalog;
use crate::config::LauncherConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gamedeck_tictactoe::BoardGeometry;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Sends logs to the configured file while the terminal UI owns the screen.
pub fn init_logging(config: &LauncherConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,gamedeck=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Run the launcher in the terminal until the user quits.
pub fn run(config: &LauncherConfig, catalog: GameCatalog) -> Result<()> {
    info!(entries = catalog.len(), "Starting Gamedeck TUI");

    let rng = match config.bot_seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };
    let mut app = App::new(
        catalog,
        BoardGeometry::new(*config.board_size()),
        *config.human_symbol(),
        rng,
    )
    .with_asset_dir(config.asset_dir().clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Launcher loop error");
    }
    res
}

#[instrument(skip_all, fields(human = %app.symbol()))]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let mut board_area = None;
        terminal.draw(|f| board_area = ui::draw(f, &*app))?;
        app.set_board_area(board_area);

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key.code),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }

    info!("Launcher closed");
    Ok(())
}
