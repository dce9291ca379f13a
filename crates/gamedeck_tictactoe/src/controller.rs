//! Turn controller: the state machine between input events and the board.
//!
//! ```text
//! NotStarted --start--> InProgress --win/draw--> Terminal(outcome)
//!      ^                     ^                          |
//!      |                     +----------start-----------+
//!      +-------------------teardown (any phase)
//! ```
//!
//! Every operation is synchronous. A human move that leaves the game
//! undecided is answered by exactly one bot move before the call returns.

use crate::action::{Move, MoveError, MoveSource};
use crate::bot::BotSelector;
use crate::geometry::BoardGeometry;
use crate::render::RenderAdapter;
use crate::rules;
use crate::session::GameSession;
use crate::types::{Board, Outcome, Symbol};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Lifecycle phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game yet, or the last one was torn down.
    NotStarted,
    /// Moves are accepted.
    InProgress,
    /// The game ended; only `start` and `teardown` do anything.
    Terminal(Outcome),
}

/// Owns the game session, the bot and the render adapter.
pub struct TurnController<A: RenderAdapter, R: Rng> {
    session: Option<GameSession>,
    bot: BotSelector<R>,
    geometry: BoardGeometry,
    adapter: A,
}

impl<A: RenderAdapter, R: Rng> std::fmt::Debug for TurnController<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnController")
            .field("phase", &self.phase())
            .field("session", &self.session)
            .field("bot", &self.bot)
            .field("geometry", &self.geometry)
            .finish()
    }
}

impl<A: RenderAdapter, R: Rng> TurnController<A, R> {
    /// Creates a controller with no game in progress.
    pub fn new(geometry: BoardGeometry, adapter: A, rng: R) -> Self {
        Self {
            session: None,
            bot: BotSelector::new(rng),
            geometry,
            adapter,
        }
    }

    /// Current phase, derived from the session.
    pub fn phase(&self) -> Phase {
        match &self.session {
            None => Phase::NotStarted,
            Some(session) if session.is_terminal() => Phase::Terminal(*session.outcome()),
            Some(_) => Phase::InProgress,
        }
    }

    /// The current session, if a game was started.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// The current board, if a game was started.
    pub fn board(&self) -> Option<&Board> {
        self.session.as_ref().map(|s| s.board())
    }

    /// The current outcome; `Undecided` when no game was started.
    pub fn outcome(&self) -> Outcome {
        self.session
            .as_ref()
            .map_or(Outcome::Undecided, |s| *s.outcome())
    }

    /// Geometry used to map pointer coordinates.
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// The bot, for inspecting its tracked cells.
    pub fn bot(&self) -> &BotSelector<R> {
        &self.bot
    }

    /// The render adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the render adapter.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Starts a new game with the human playing `human`.
    ///
    /// Any previous session is discarded. When the human plays `Second`,
    /// the bot places the opening `First` symbol before this returns.
    #[instrument(skip(self))]
    pub fn start(&mut self, human: Symbol) {
        info!(%human, "Starting new game");
        self.session = Some(GameSession::new(human));
        self.bot.reset();
        self.adapter.reset();

        if human == Symbol::Second {
            self.bot_move();
        }
    }

    /// Submits a move for whoever's turn it is.
    ///
    /// Returns `true` if the move was applied. Invalid moves and moves
    /// outside an in-progress game are ignored and leave all state
    /// unchanged.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize, source: MoveSource) -> bool {
        match self.try_move(index, source) {
            Ok(mv) => {
                debug!(%mv, outcome = %self.outcome(), "Move applied");
                if source == MoveSource::Human && !self.outcome().is_terminal() {
                    self.bot_move();
                }
                true
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                false
            }
        }
    }

    /// Handles a pointer activation at board-local `(x, y)`.
    ///
    /// Coordinates outside the board are ignored like any other invalid
    /// move.
    #[instrument(skip(self))]
    pub fn cell_activated(&mut self, x: f64, y: f64) -> bool {
        match self.geometry.pointer_to_cell(x, y) {
            Some(pos) => self.submit_move(pos.to_index(), MoveSource::Human),
            None => {
                debug!(error = %MoveError::OffBoard { x, y }, "Move ignored");
                false
            }
        }
    }

    /// Discards the session and lets the adapter release its resources.
    #[instrument(skip(self))]
    pub fn teardown(&mut self) {
        info!(phase = ?self.phase(), "Tearing down session");
        self.session = None;
        self.bot.reset();
        self.adapter.teardown();
    }

    /// Validates and applies one move, then evaluates the board.
    fn try_move(&mut self, index: usize, source: MoveSource) -> Result<Move, MoveError> {
        let session = match self.session.as_mut() {
            Some(session) if !session.is_terminal() => session,
            _ => return Err(MoveError::NotInProgress),
        };

        let symbol = session.board().to_move();
        let pos = session.board_mut().place(index, symbol)?;
        debug_assert!(session.board().is_balanced(), "symbol counts out of balance");

        let outcome = rules::evaluate(session.board(), symbol);
        let mv = Move::new(symbol, pos, source);
        session.record(mv, outcome);

        self.bot.claim(pos);
        self.adapter.symbol_drawn(pos.row(), pos.col(), symbol);

        if outcome.is_terminal() {
            info!(%outcome, moves = session.move_count(), "Game over");
            self.adapter.outcome(outcome);
        }
        Ok(mv)
    }

    /// Lets the bot answer. The board always has a free cell here.
    fn bot_move(&mut self) {
        let pos = match self.bot.select() {
            Ok(pos) => pos,
            Err(e) => {
                error!(error = %e, board = ?self.board(), "Bot asked to move with no cells left");
                debug_assert!(false, "bot invoked on a full board");
                return;
            }
        };

        if let Err(e) = self.try_move(pos.to_index(), MoveSource::Bot) {
            warn!(error = %e, position = %pos, "Bot move rejected");
            debug_assert!(false, "bot tracked set out of sync with the board");
        }
    }
}
