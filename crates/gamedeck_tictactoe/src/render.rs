//! Outbound side of the engine: draw instructions and notifications.

use crate::types::{Outcome, Symbol};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Capability the controller draws through.
///
/// The controller only writes to the adapter; it never reads rendering
/// state back.
pub trait RenderAdapter {
    /// A symbol was placed at `(row, col)`.
    fn symbol_drawn(&mut self, row: usize, col: usize, symbol: Symbol);

    /// The game reached a terminal outcome.
    fn outcome(&mut self, outcome: Outcome);

    /// A new game started; clear the board.
    fn reset(&mut self);

    /// The session is being torn down; release drawing resources.
    fn teardown(&mut self) {}
}

impl<A: RenderAdapter + ?Sized> RenderAdapter for &mut A {
    fn symbol_drawn(&mut self, row: usize, col: usize, symbol: Symbol) {
        (**self).symbol_drawn(row, col, symbol)
    }

    fn outcome(&mut self, outcome: Outcome) {
        (**self).outcome(outcome)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn teardown(&mut self) {
        (**self).teardown()
    }
}

/// A notification emitted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A symbol was placed.
    SymbolDrawn {
        /// Row of the cell (0-2).
        row: usize,
        /// Column of the cell (0-2).
        col: usize,
        /// The placed symbol.
        symbol: Symbol,
    },
    /// The game ended.
    Outcome {
        /// How it ended.
        outcome: Outcome,
    },
    /// A new game started.
    Reset,
    /// The session was torn down.
    Teardown,
}

impl std::fmt::Display for EngineEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineEvent::SymbolDrawn { row, col, symbol } => {
                write!(f, "{} at row {}, col {}", symbol, row, col)
            }
            EngineEvent::Outcome { outcome } => write!(f, "Game over: {}", outcome),
            EngineEvent::Reset => write!(f, "New game"),
            EngineEvent::Teardown => write!(f, "Session closed"),
        }
    }
}

/// Adapter that records every notification in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<EngineEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    /// Takes the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    fn push(&mut self, event: EngineEvent) {
        debug!(%event, "Engine event");
        self.events.push(event);
    }
}

impl RenderAdapter for EventLog {
    fn symbol_drawn(&mut self, row: usize, col: usize, symbol: Symbol) {
        self.push(EngineEvent::SymbolDrawn { row, col, symbol });
    }

    fn outcome(&mut self, outcome: Outcome) {
        self.push(EngineEvent::Outcome { outcome });
    }

    fn reset(&mut self) {
        self.push(EngineEvent::Reset);
    }

    fn teardown(&mut self) {
        self.push(EngineEvent::Teardown);
    }
}
