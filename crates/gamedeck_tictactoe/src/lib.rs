//! Tic-tac-toe engine for the gamedeck launcher.
//!
//! The engine is driven by three inbound events and talks back through a
//! [`RenderAdapter`]:
//!
//! - [`TurnController::start`] begins a game with the human's chosen symbol
//! - [`TurnController::cell_activated`] maps a pointer click to a cell and plays it
//! - [`TurnController::teardown`] discards the game
//!
//! Human moves are answered synchronously by a [`BotSelector`] that picks
//! uniformly among the empty cells.
//!
//! # Example
//!
//! ```
//! use gamedeck_tictactoe::{BoardGeometry, EventLog, Phase, Symbol, TurnController};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut game = TurnController::new(
//!     BoardGeometry::default(),
//!     EventLog::new(),
//!     StdRng::seed_from_u64(42),
//! );
//! game.start(Symbol::First);
//! assert!(game.cell_activated(10.0, 10.0));
//! assert_eq!(game.phase(), Phase::InProgress);
//! assert_eq!(game.session().map(|s| *s.move_count()), Some(2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod bot;
mod controller;
mod geometry;
mod position;
mod render;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError, MoveSource};
pub use bot::BotSelector;
pub use controller::{Phase, TurnController};
pub use geometry::{BoardGeometry, DEFAULT_BOARD_SIZE, Glyph, Point, Segment};
pub use position::Position;
pub use render::{EngineEvent, EventLog, RenderAdapter};
pub use session::GameSession;
pub use types::{Board, Outcome, Square, Symbol};
