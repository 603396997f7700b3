//! Game state tests - full turns through the public transitions

use autotris::core::{tick_interval_ms, Board, GameState, Tetromino};
use autotris::types::{GameAction, PieceKind, Rotation};

fn game_on(rows: &[&str], piece: Tetromino) -> GameState {
    GameState::with_seed(1, 12345)
        .with_board(Board::from_rows(rows))
        .with_current(piece)
}

#[test]
fn test_new_game() {
    let state = GameState::with_seed(3, 12345);
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.level(), 3);
    assert_eq!(state.piece_id(), 1);
    assert!(state.current().is_some());
    assert!(state.next().is_some());
    assert!(state.playable());
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn test_hard_drop_clears_two_rows() {
    let state = game_on(
        &["IIIIIIII..", "IIIIIIII.."],
        Tetromino::new(PieceKind::O).at(7, 0),
    );

    let after = state.hard_drop();

    // 18 rows at 2 points, then a double at level 1.
    assert_eq!(after.score(), 36 + 300);
    assert_eq!(after.lines(), 2);
    assert_eq!(after.board().filled_count(), 0);
    assert_eq!(after.piece_id(), 2);
    assert_eq!(after.current().map(|p| p.kind), state.next().map(|p| p.kind));
}

#[test]
fn test_vertical_i_scores_a_tetris() {
    let rows = ["IIIIIIIII."; 4];
    let piece = Tetromino {
        kind: PieceKind::I,
        rotation: Rotation::East,
        x: 7,
        y: 0,
    };

    let after = game_on(&rows, piece).hard_drop();

    assert_eq!(after.lines(), 4);
    assert_eq!(after.score(), 32 + 800);
    assert_eq!(after.board().filled_count(), 0);
}

#[test]
fn test_level_advances_every_ten_lines() {
    let mut state = GameState::with_seed(1, 12345);
    let mut locks = 0;
    while state.lines() < 10 && locks < 20 {
        // A fresh double every time: two nearly full rows and an O in the gap.
        state = state
            .with_board(Board::from_rows(&["IIIIIIII..", "IIIIIIII.."]))
            .with_current(Tetromino::new(PieceKind::O).at(7, 0))
            .hard_drop();
        locks += 1;
    }
    assert_eq!(state.lines(), 10);
    assert_eq!(state.level(), 2);
    assert_eq!(tick_interval_ms(state.level(), 1.0), 920);
}

#[test]
fn test_pure_transitions_leave_input_untouched() {
    let state = GameState::with_seed(1, 12345);
    let before = state.clone();
    let _ = state.move_left().soft_drop().hard_drop();
    assert_eq!(state, before);
}

#[test]
fn test_move_and_rotate_against_walls() {
    let mut state = GameState::with_seed(1, 12345).with_current(Tetromino::new(PieceKind::T));
    for _ in 0..10 {
        state.apply_action(GameAction::MoveLeft);
    }
    let piece = state.current().unwrap();
    assert_eq!(piece.cells().map(|(x, _)| x).min(), Some(0));
    assert!(!state.apply_action(GameAction::MoveLeft));

    // Rotating at the wall still succeeds (in place or via a kick).
    assert!(state.apply_action(GameAction::Rotate));
    assert!(state.current().unwrap().cells().all(|(x, _)| x >= 0));
}

#[test]
fn test_soft_drop_and_tick_score_one_per_row() {
    let mut state = GameState::with_seed(1, 12345);
    assert!(state.apply_action(GameAction::SoftDrop));
    assert!(state.apply_action(GameAction::Tick));
    assert_eq!(state.score(), 2);
}

#[test]
fn test_pause_blocks_gameplay() {
    let mut state = GameState::with_seed(1, 12345);
    assert!(state.apply_action(GameAction::Pause));
    let frozen = state.clone();

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Tick,
    ] {
        assert!(!state.apply_action(action), "{:?}", action);
    }
    assert_eq!(state, frozen);
    assert_eq!(state.move_left(), frozen);

    assert!(state.apply_action(GameAction::Resume));
    assert!(state.apply_action(GameAction::MoveLeft));
}

#[test]
fn test_stacking_ends_the_game() {
    let mut state = GameState::with_seed(1, 12345);
    let mut drops = 0;
    while !state.game_over() {
        assert!(state.apply_action(GameAction::HardDrop));
        drops += 1;
        assert!(drops < 200, "game never ended");
    }

    assert!(state.board().is_top_row_occupied());
    let ended = state.clone();
    assert!(!state.apply_action(GameAction::HardDrop));
    assert!(!state.apply_action(GameAction::Tick));
    assert_eq!(state, ended);
}

#[test]
fn test_restart_resets_progress() {
    let mut state = GameState::with_seed(1, 12345);
    state.apply_action(GameAction::HardDrop);
    state.apply_action(GameAction::HardDrop);

    let fresh = state.restart(4);
    assert_eq!(fresh.score(), 0);
    assert_eq!(fresh.lines(), 0);
    assert_eq!(fresh.level(), 4);
    assert_eq!(fresh.piece_id(), 1);
    assert_eq!(fresh.board().filled_count(), 0);
    assert!(fresh.playable());
}
