//! Tests for the turn controller state machine.

use gamedeck_tictactoe::{
    BoardGeometry, EngineEvent, EventLog, MoveSource, Outcome, Phase, Position, Square, Symbol,
    TurnController,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn controller(seed: u64) -> TurnController<EventLog, StdRng> {
    TurnController::new(
        BoardGeometry::default(),
        EventLog::new(),
        StdRng::seed_from_u64(seed),
    )
}

fn drawn(events: &[EngineEvent]) -> Vec<(usize, usize, Symbol)> {
    events
        .iter()
        .filter_map(|e| match e {
            EngineEvent::SymbolDrawn { row, col, symbol } => Some((*row, *col, *symbol)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_not_started_ignores_moves() {
    let mut game = controller(1);
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(!game.submit_move(0, MoveSource::Human));
    assert!(!game.cell_activated(10.0, 10.0));
    assert!(game.adapter().events().is_empty());
    assert_eq!(game.outcome(), Outcome::Undecided);
}

#[test]
fn test_human_click_is_answered_by_bot() {
    for seed in 0..20 {
        let mut game = controller(seed);
        game.start(Symbol::First);
        assert!(game.cell_activated(5.0, 5.0));

        let events = game.adapter().events();
        assert_eq!(events[0], EngineEvent::Reset);
        let drawn = drawn(events);
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0], (0, 0, Symbol::First));
        assert_eq!(drawn[1].2, Symbol::Second);
        assert_ne!((drawn[1].0, drawn[1].1), (0, 0));
        assert_eq!(game.outcome(), Outcome::Undecided);
        assert_eq!(game.phase(), Phase::InProgress);
    }
}

#[test]
fn test_repeated_cell_is_noop() {
    let mut game = controller(3);
    game.start(Symbol::First);
    assert!(game.submit_move(0, MoveSource::Human));

    let board = game.board().cloned();
    let events = game.adapter().events().len();
    assert!(!game.submit_move(0, MoveSource::Human));
    assert_eq!(game.board().cloned(), board);
    assert_eq!(game.adapter().events().len(), events);
    assert_eq!(game.outcome(), Outcome::Undecided);
}

#[test]
fn test_out_of_range_is_noop() {
    let mut game = controller(4);
    game.start(Symbol::First);
    assert!(!game.submit_move(9, MoveSource::Human));
    assert!(!game.cell_activated(330.0, 0.0));
    assert!(!game.cell_activated(-1.0, 50.0));
    assert_eq!(game.session().map(|s| *s.move_count()), Some(0));
    assert_eq!(game.bot().remaining().len(), 9);
}

#[test]
fn test_start_as_second_lets_bot_open() {
    for seed in 0..20 {
        let mut game = controller(seed);
        game.start(Symbol::Second);

        let board = game.board().unwrap();
        assert_eq!(board.count(Symbol::First), 1);
        assert_eq!(board.count(Symbol::Second), 0);
        assert_eq!(board.to_move(), Symbol::Second);
        assert_eq!(game.bot().remaining().len(), 8);
        assert_eq!(drawn(game.adapter().events()).len(), 1);
    }
}

#[test]
fn test_start_as_first_seeds_all_cells() {
    let mut game = controller(5);
    game.start(Symbol::First);
    assert_eq!(game.bot().remaining(), &Position::ALL);
    assert_eq!(game.board().map(|b| b.empty_positions().len()), Some(9));
}

#[test]
fn test_bot_never_picks_occupied_cell() {
    for seed in 0..50 {
        let mut game = controller(seed);
        game.start(Symbol::First);
        while game.phase() == Phase::InProgress {
            let board = game.board().unwrap().clone();
            let target = board.empty_positions()[0];
            assert!(game.submit_move(target.to_index(), MoveSource::Human));

            let after = game.board().unwrap();
            for pos in Position::ALL {
                if let Square::Occupied(symbol) = board.get(pos) {
                    assert_eq!(after.get(pos), Square::Occupied(symbol));
                }
            }
            for pos in game.bot().remaining() {
                assert_eq!(after.get(*pos), Square::Empty);
            }
        }
    }
}

#[test]
fn test_game_reaches_terminal_and_freezes() {
    let mut game = controller(11);
    game.start(Symbol::First);
    while game.phase() == Phase::InProgress {
        let target = game.board().unwrap().empty_positions()[0];
        game.submit_move(target.to_index(), MoveSource::Human);
    }

    let Phase::Terminal(outcome) = game.phase() else {
        panic!("expected terminal phase");
    };
    assert!(outcome.is_terminal());
    assert_eq!(
        game.adapter().events().last(),
        Some(&EngineEvent::Outcome { outcome })
    );

    let board = game.board().cloned();
    for index in 0..9 {
        assert!(!game.submit_move(index, MoveSource::Human));
        assert!(!game.submit_move(index, MoveSource::Bot));
    }
    assert_eq!(game.board().cloned(), board);
}

#[test]
fn test_human_win_skips_bot_reply() {
    // Both sides driven by hand so the line is deterministic.
    let mut game = controller(0);
    game.start(Symbol::First);
    assert!(game.submit_move(0, MoveSource::Bot));
    assert!(game.submit_move(3, MoveSource::Bot));
    assert!(game.submit_move(1, MoveSource::Bot));
    assert!(game.submit_move(4, MoveSource::Bot));
    assert!(game.submit_move(2, MoveSource::Human));

    assert_eq!(game.phase(), Phase::Terminal(Outcome::Won(Symbol::First)));
    assert_eq!(game.board().map(|b| b.count(Symbol::Second)), Some(2));
    assert_eq!(game.session().map(|s| *s.move_count()), Some(5));
}

#[test]
fn test_restart_discards_previous_game() {
    let mut game = controller(8);
    game.start(Symbol::First);
    game.submit_move(4, MoveSource::Human);
    game.start(Symbol::First);

    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.board().map(|b| b.empty_positions().len()), Some(9));
    assert_eq!(game.session().map(|s| s.history().len()), Some(0));
    assert_eq!(game.adapter().events().last(), Some(&EngineEvent::Reset));
}

#[test]
fn test_teardown_returns_to_not_started() {
    let mut game = controller(9);
    game.start(Symbol::First);
    game.submit_move(4, MoveSource::Human);
    game.teardown();

    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(game.session().is_none());
    assert_eq!(game.adapter().events().last(), Some(&EngineEvent::Teardown));
    assert!(!game.submit_move(0, MoveSource::Human));
}

#[test]
fn test_draw_outcome_emitted() {
    // X O X / X O O / O X X, driven entirely by hand.
    let mut game = controller(0);
    game.start(Symbol::First);
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert!(game.submit_move(index, MoveSource::Bot), "index {}", index);
    }
    assert_eq!(game.phase(), Phase::Terminal(Outcome::Draw));
    assert_eq!(
        game.adapter().events().last(),
        Some(&EngineEvent::Outcome { outcome: Outcome::Draw })
    );
}

#[test]
fn test_events_serialize_as_json() {
    let mut game = controller(2);
    game.start(Symbol::First);
    game.submit_move(4, MoveSource::Human);

    let json = serde_json::to_string(&game.adapter().events()[1]).unwrap();
    assert_eq!(json, r#"{"event":"symbol_drawn","row":1,"col":1,"symbol":"first"}"#);
}
