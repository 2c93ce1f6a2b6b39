//! End-to-end game flow tests: spawn, drop, lock, clear, score, game over.

use blockfall::core::{Board, GameState, Piece};
use blockfall::types::{GameAction, PieceKind, Rotation, Status};

fn playing_state(seed: u32) -> GameState {
    GameState::new(10, 20, seed).apply(GameAction::Start)
}

/// A 10x20 board with the given row filled except at `gaps`.
fn board_with_gap_row(y: usize, gaps: &[usize]) -> Board {
    let mut rows = vec![vec![None; 10]; 20];
    for x in 0..10 {
        if !gaps.contains(&x) {
            rows[y][x] = Some(PieceKind::J);
        }
    }
    Board::from_rows(rows)
}

#[test]
fn test_menu_ignores_gameplay_actions() {
    let state = GameState::new(10, 20, 3);
    assert_eq!(state.status(), Status::Menu);

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::Hold,
    ] {
        assert_eq!(state.apply(action), state);
    }

    let started = state.apply(GameAction::Start);
    assert_eq!(started.status(), Status::Playing);
    assert_eq!(started.score(), 0);
    assert_eq!(started.lines_cleared(), 0);
}

#[test]
fn test_hard_drop_on_empty_board_scores_distance_plus_bonus() {
    let state = playing_state(11);
    let dropped = state.apply(GameAction::HardDrop);

    // Every spawn orientation has its lowest tile on row 1, so the drop
    // always travels 18 rows on an empty board: 2 * 18 + 10 placing bonus.
    assert_eq!(dropped.score(), 46);
    assert_eq!(dropped.lines_cleared(), 0);
    assert_eq!(dropped.status(), Status::Playing);
}

#[test]
fn test_single_line_clear_scores_forty_at_level_zero() {
    let board = board_with_gap_row(19, &[4, 5]);
    let piece = Piece {
        kind: PieceKind::O,
        rotation: Rotation::R0,
        x: 3,
        y: 0,
    };
    let state = playing_state(5).with_board(board).with_current(Some(piece));

    let after = state.apply(GameAction::HardDrop);

    // O drops 18 rows into the gap: 36 drop bonus + 10 placing + 40 * 1.
    assert_eq!(after.score(), 86);
    assert_eq!(after.lines_cleared(), 1);
    assert_eq!(after.level(), 0);

    // Row 19 collapsed; the O's top half settled onto the bottom row.
    assert_eq!(after.board().get(4, 19), Some(Some(PieceKind::O)));
    assert_eq!(after.board().get(3, 19), Some(None));
}

#[test]
fn test_four_line_clear_scores_twelve_hundred() {
    let mut rows = vec![vec![None; 10]; 20];
    for y in 16..20 {
        for x in 0..9 {
            rows[y][x] = Some(PieceKind::L);
        }
    }
    let board = Board::from_rows(rows);
    // Vertical I in column 9.
    let piece = Piece {
        kind: PieceKind::I,
        rotation: Rotation::R1,
        x: 7,
        y: 0,
    };
    let state = playing_state(5).with_board(board).with_current(Some(piece));

    let after = state.apply(GameAction::HardDrop);

    // 16 rows of travel, placing bonus, then 1200 * (level 0 + 1).
    assert_eq!(after.score(), 2 * 16 + 10 + 1200);
    assert_eq!(after.lines_cleared(), 4);
    assert_eq!(after.level(), 0);
    assert!(after.board().cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_lock_in_top_rows_ends_game() {
    let mut board = Board::new(10, 20);
    for x in 3..7 {
        board.set(x, 2, Some(PieceKind::Z));
    }
    let piece = Piece {
        kind: PieceKind::O,
        rotation: Rotation::R0,
        x: 3,
        y: 0,
    };
    let state = playing_state(9).with_board(board).with_current(Some(piece));

    // The O cannot descend, so this step locks it into rows 0 and 1.
    let over = state.step_down();
    assert_eq!(over.status(), Status::GameOver);
    assert_eq!(over.current(), None);

    // A finished game rejects everything except a fresh start elsewhere.
    for action in [
        GameAction::MoveLeft,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::Hold,
        GameAction::Pause,
        GameAction::Start,
    ] {
        assert_eq!(over.apply(action), over);
    }
}

#[test]
fn test_pause_freezes_and_resumes() {
    let state = playing_state(21);
    let paused = state.apply(GameAction::Pause);
    assert_eq!(paused.status(), Status::Paused);

    assert_eq!(paused.apply(GameAction::MoveLeft), paused);
    assert_eq!(paused.apply(GameAction::HardDrop), paused);
    assert_eq!(paused.step_down(), paused);

    let resumed = paused.apply(GameAction::Pause);
    assert_eq!(resumed.status(), Status::Playing);
    assert_eq!(resumed.current(), state.current());
}

#[test]
fn test_hold_swaps_once_per_piece() {
    let state = playing_state(33);
    let first_kind = state.current().unwrap().kind;
    let queue_head = state.next_queue()[0];

    let held = state.apply(GameAction::Hold);
    assert_eq!(held.held(), Some(first_kind));
    assert_eq!(held.current().unwrap().kind, queue_head);
    assert!(!held.can_hold());

    // Second hold before locking is rejected.
    assert_eq!(held.apply(GameAction::Hold), held);
}

#[test]
fn test_queue_always_holds_five_pieces() {
    let mut state = playing_state(47);
    for _ in 0..10 {
        assert_eq!(state.next_queue().len(), 5);
        let expected_next = state.next_queue()[0];
        state = state.apply(GameAction::HardDrop);
        if state.status() != Status::Playing {
            break;
        }
        assert_eq!(state.current().unwrap().kind, expected_next);
    }
}

#[test]
fn test_same_seed_same_game() {
    let actions = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::HardDrop,
    ];

    let mut a = playing_state(1234);
    let mut b = playing_state(1234);
    for action in actions {
        a = a.apply(action);
        b = b.apply(action);
    }
    assert_eq!(a, b);
}

#[test]
fn test_transitions_do_not_mutate_source() {
    let state = playing_state(77);
    let snapshot = state.clone();

    let _ = state.apply(GameAction::HardDrop);
    let _ = state.apply(GameAction::MoveLeft);
    let _ = state.step_down();

    assert_eq!(state, snapshot);
}
