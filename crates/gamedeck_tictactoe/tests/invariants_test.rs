//! Property tests over arbitrary click sequences.

use gamedeck_tictactoe::{
    Board, BoardGeometry, EventLog, MoveSource, Outcome, Phase, Square, Symbol, TurnController,
    rules,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn brute_force_outcome(board: &Board) -> Outcome {
    for symbol in [Symbol::First, Symbol::Second] {
        let mark = Square::Occupied(symbol);
        let lines = rules::WIN_PATTERNS
            .iter()
            .any(|line| line.iter().all(|pos| board.get(*pos) == mark));
        if lines {
            return Outcome::Won(symbol);
        }
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

proptest! {
    #[test]
    fn symbol_counts_stay_balanced(
        seed in any::<u64>(),
        human in prop_oneof![Just(Symbol::First), Just(Symbol::Second)],
        clicks in prop::collection::vec((-50.0f64..400.0, -50.0f64..400.0), 0..30),
    ) {
        let mut game = TurnController::new(
            BoardGeometry::default(),
            EventLog::new(),
            StdRng::seed_from_u64(seed),
        );
        game.start(human);
        for (x, y) in clicks {
            game.cell_activated(x, y);
            let board = game.board().unwrap();
            let first = board.count(Symbol::First) as isize;
            let second = board.count(Symbol::Second) as isize;
            prop_assert!((first - second).abs() <= 1);
            prop_assert!(board.is_balanced());
        }
    }

    #[test]
    fn rejected_moves_change_nothing(
        seed in any::<u64>(),
        indices in prop::collection::vec(0usize..12, 1..40),
    ) {
        let mut game = TurnController::new(
            BoardGeometry::default(),
            EventLog::new(),
            StdRng::seed_from_u64(seed),
        );
        game.start(Symbol::First);
        for index in indices {
            let before = game.session().cloned();
            let events = game.adapter().events().len();
            if !game.submit_move(index, MoveSource::Human) {
                prop_assert_eq!(game.session().cloned(), before);
                prop_assert_eq!(game.adapter().events().len(), events);
            }
        }
    }

    #[test]
    fn controller_outcome_matches_brute_force(
        seed in any::<u64>(),
        indices in prop::collection::vec(0usize..9, 1..20),
    ) {
        let mut game = TurnController::new(
            BoardGeometry::default(),
            EventLog::new(),
            StdRng::seed_from_u64(seed),
        );
        game.start(Symbol::First);
        for index in indices {
            game.submit_move(index, MoveSource::Human);
            let board = game.board().unwrap();
            prop_assert_eq!(game.outcome(), brute_force_outcome(board));
            if game.outcome().is_terminal() {
                prop_assert_eq!(game.phase(), Phase::Terminal(game.outcome()));
            }
        }
    }
}
