//! Engine scenarios through the public facade

use classic_tetris::core::{GameState, MemoryHighScores};
use classic_tetris::types::{GameAction, Phase, BOARD_HEIGHT};

/// Successful single-row drops from spawn before the active piece rests
fn drops_until_resting(state: &GameState) -> i8 {
    let piece = state.active().unwrap();
    let lowest = piece.shape.minos().iter().map(|&(_, row)| row).max().unwrap();
    BOARD_HEIGHT as i8 - 1 - lowest - piece.y
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::in_memory(12345);
    assert_eq!(state.phase(), Phase::Idle);
    assert!(state.active().is_none());

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.phase(), Phase::Playing);
    assert!(state.active().is_some());
    assert!(state.next_kind().is_some());

    assert!(state.apply_action(GameAction::TogglePause));
    assert_eq!(state.phase(), Phase::Paused);
    assert!(state.apply_action(GameAction::TogglePause));
    assert_eq!(state.phase(), Phase::Playing);
}

#[test]
fn test_idle_ignores_everything_but_start() {
    let mut state = GameState::in_memory(7);
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Rotate,
        GameAction::TogglePause,
    ] {
        assert!(!state.apply_action(action), "{:?}", action);
    }
    assert!(!state.tick(5000));
    assert_eq!(state.snapshot(), GameState::in_memory(7).snapshot());
}

#[test]
fn test_first_piece_falls_and_locks() {
    let mut state = GameState::in_memory(2024);
    state.start();

    let drops = drops_until_resting(&state);
    for _ in 0..drops {
        assert!(state.move_down());
        assert!(state.take_last_event().is_none());
    }

    state.move_down();
    let event = state.take_last_event().expect("piece should lock");
    assert_eq!(event.lines_cleared, 0);
    assert_eq!(event.points, 0);
    assert_eq!(state.board().filled_count(), 4);
    assert_eq!(state.score(), 0);
    assert_eq!(state.active().unwrap().y, 0);
}

#[test]
fn test_gravity_moves_piece_after_interval() {
    let mut state = GameState::in_memory(99);
    state.start();
    let y = state.active().unwrap().y;

    assert!(!state.tick(500));
    assert!(!state.tick(500));
    assert_eq!(state.active().unwrap().y, y);

    assert!(state.tick(16));
    assert_eq!(state.active().unwrap().y, y + 1);
}

#[test]
fn test_pause_freezes_gravity() {
    let mut state = GameState::in_memory(99);
    state.start();
    state.toggle_pause();

    let before = state.snapshot();
    for _ in 0..100 {
        state.tick(100);
    }
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_stacking_in_the_middle_ends_the_game() {
    let mut state = GameState::in_memory(31337);
    state.start();

    let mut steps = 0;
    while state.phase() == Phase::Playing {
        state.move_down();
        steps += 1;
        assert!(steps < 1000, "the well should fill up");
    }
    assert_eq!(state.phase(), Phase::GameOver);
    assert!(state.active().is_some());

    // Commands have no effect once the game is over.
    let before = state.snapshot();
    assert!(!state.move_left());
    assert!(!state.rotate());
    assert!(!state.toggle_pause());
    assert!(!state.tick(10_000));
    assert_eq!(state.snapshot(), before);

    // Restart clears everything.
    assert!(state.start());
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.board().filled_count(), 0);
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.level(), 1);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::Start,
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveDown,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::Rotate,
    ];

    let mut a = GameState::in_memory(555);
    let mut b = GameState::in_memory(555);
    for frame in 0..400 {
        let action = script[frame % script.len()];
        assert_eq!(a.apply_action(action), b.apply_action(action));
        a.tick(16);
        b.tick(16);
        assert_eq!(a.snapshot().fingerprint(), b.snapshot().fingerprint());
    }
}

#[test]
fn test_fingerprint_tracks_visible_changes() {
    let mut state = GameState::in_memory(3);
    state.start();
    let first = state.snapshot().fingerprint();
    assert_eq!(state.snapshot().fingerprint(), first);

    state.move_down();
    assert_ne!(state.snapshot().fingerprint(), first);
}

#[test]
fn test_high_score_loaded_from_store() {
    let store = MemoryHighScores::with_value(2500);
    let state = GameState::new(1, Box::new(store));
    assert_eq!(state.high_score(), 2500);
    assert_eq!(state.snapshot().high_score, 2500);
}

#[test]
fn test_unavailable_store_starts_at_zero() {
    let mut state = GameState::new(1, Box::new(MemoryHighScores::unavailable()));
    assert_eq!(state.high_score(), 0);
    assert!(state.start());
}
