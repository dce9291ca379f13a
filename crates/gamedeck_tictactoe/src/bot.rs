//! Random opponent.

use crate::action::MoveError;
use crate::position::Position;
use rand::Rng;
use std::fmt::{Debug, Formatter};
use tracing::{debug, instrument};

/// Bot that picks uniformly among the cells it still believes are empty.
///
/// The set of empty cells is tracked incrementally: the bot removes the
/// cells it picks, the controller reports the cells the human takes with
/// [`BotSelector::claim`], and [`BotSelector::reset`] reseeds all nine.
pub struct BotSelector<R: Rng> {
    remaining: Vec<Position>,
    rng: R,
}

impl<R: Rng> Debug for BotSelector<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BotSelector {{ remaining: {:?} }}", self.remaining)
    }
}

impl<R: Rng> BotSelector<R> {
    /// Creates a bot with all nine cells available.
    pub fn new(rng: R) -> Self {
        BotSelector {
            remaining: Position::ALL.to_vec(),
            rng,
        }
    }

    /// Makes all nine cells available again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.remaining = Position::ALL.to_vec();
    }

    /// Removes a cell taken by someone else. Unknown cells are ignored.
    pub fn claim(&mut self, pos: Position) {
        self.remaining.retain(|p| *p != pos);
    }

    /// Cells the bot may still choose, in the order they were seeded.
    pub fn remaining(&self) -> &[Position] {
        &self.remaining
    }

    /// Picks one remaining cell uniformly at random and removes it.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoMovesAvailable`] when no cells remain.
    #[instrument(skip(self))]
    pub fn select(&mut self) -> Result<Position, MoveError> {
        if self.remaining.is_empty() {
            return Err(MoveError::NoMovesAvailable);
        }
        let choice = self.rng.gen_range(0..self.remaining.len());
        let pos = self.remaining.remove(choice);
        debug!(position = %pos, remaining = self.remaining.len(), "Bot chose cell");
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bot(seed: u64) -> BotSelector<StdRng> {
        BotSelector::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_selects_each_cell_once() {
        let mut bot = bot(7);
        let mut picked: Vec<Position> = (0..9).map(|_| bot.select().unwrap()).collect();
        picked.sort();
        assert_eq!(picked, Position::ALL.to_vec());
        assert_eq!(bot.select(), Err(MoveError::NoMovesAvailable));
    }

    #[test]
    fn test_claimed_cell_never_selected() {
        for seed in 0..50 {
            let mut bot = bot(seed);
            bot.claim(Position::Center);
            for _ in 0..8 {
                assert_ne!(bot.select().unwrap(), Position::Center);
            }
        }
    }

    #[test]
    fn test_reset_restores_all_cells() {
        let mut bot = bot(1);
        bot.select().unwrap();
        bot.claim(Position::TopLeft);
        bot.reset();
        assert_eq!(bot.remaining(), &Position::ALL);
    }

    #[test]
    fn test_choice_is_spread_across_cells() {
        let mut counts = [0usize; 9];
        for seed in 0..900 {
            let pos = bot(seed).select().unwrap();
            counts[pos.to_index()] += 1;
        }
        assert!(counts.iter().all(|c| *c > 50), "counts: {:?}", counts);
    }
}
