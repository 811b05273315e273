//! Board tests - collision, merge and row clearing through the public API

use blockfall::core::{line_clear_points, shape_of, ActivePiece, Board, PieceController, Shape};
use blockfall::types::{PieceKind, EMPTY};

#[test]
fn test_board_new_empty() {
    let board = Board::new(21, 16);
    assert_eq!(board.width(), 21);
    assert_eq!(board.height(), 16);
    assert_eq!(board.cells().len(), 21 * 16);

    for y in 0..16 {
        for x in 0..21 {
            assert_eq!(board.get(x, y), Some(EMPTY), "cell ({x}, {y}) should be empty");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(10, 8);
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 8), None);
}

#[test]
fn test_collision_walls_floor_and_open_top() {
    let board = Board::new(10, 8);
    let o = shape_of(PieceKind::O);

    assert!(!board.is_collision(0, 0, &o));
    assert!(!board.is_collision(8, 6, &o));
    assert!(board.is_collision(-1, 0, &o), "left wall");
    assert!(board.is_collision(9, 0, &o), "right wall");
    assert!(board.is_collision(0, 7, &o), "floor");
    // Rows above the grid are free space.
    assert!(!board.is_collision(0, -1, &o));
    assert!(!board.is_collision(0, -5, &o));
}

#[test]
fn test_collision_with_locked_cells() {
    let mut board = Board::new(10, 8);
    board.set(5, 5, 1);
    let o = shape_of(PieceKind::O);

    assert!(board.is_collision(4, 4, &o));
    assert!(board.is_collision(5, 5, &o));
    assert!(!board.is_collision(6, 5, &o));
    assert!(!board.is_collision(3, 5, &o));
}

#[test]
fn test_merge_writes_color_plus_one() {
    let mut board = Board::new(6, 6);
    let t = shape_of(PieceKind::T);
    board.merge(1, 2, &t, 4);

    assert_eq!(board.get(1, 2), Some(5));
    assert_eq!(board.get(2, 2), Some(5));
    assert_eq!(board.get(3, 2), Some(5));
    assert_eq!(board.get(2, 3), Some(5));
    // The holes in the T bounding box stay empty.
    assert_eq!(board.get(1, 3), Some(EMPTY));
    assert_eq!(board.get(3, 3), Some(EMPTY));
    assert_eq!(board.filled_count(), 4);
}

#[test]
#[should_panic]
fn test_merge_out_of_bounds_panics() {
    let mut board = Board::new(4, 4);
    board.merge(3, 0, &shape_of(PieceKind::I), 0);
}

#[test]
fn test_clear_keeps_rows_above_in_order() {
    let mut board = Board::from_rows(&[
        &[0, 0, 0, 0],
        &[2, 0, 0, 0],
        &[1, 1, 1, 1],
        &[0, 3, 0, 0],
        &[1, 1, 1, 1],
    ]);

    assert_eq!(board.clear_completed_rows(), 2);
    assert_eq!(board.row(0), &[0, 0, 0, 0]);
    assert_eq!(board.row(1), &[0, 0, 0, 0]);
    assert_eq!(board.row(2), &[0, 0, 0, 0]);
    assert_eq!(board.row(3), &[2, 0, 0, 0]);
    assert_eq!(board.row(4), &[0, 3, 0, 0]);
}

#[test]
fn test_clear_without_full_rows_is_a_noop() {
    let mut board = Board::from_rows(&[&[0, 1, 0], &[1, 0, 1]]);
    let before = board.clone();
    assert_eq!(board.clear_completed_rows(), 0);
    assert_eq!(board, before);
}

/// One missing cell in the bottom row of a 4x4 board; filling it clears the row.
#[test]
fn test_single_gap_fill_scores_one_row() {
    let mut board = Board::new(4, 4);
    for x in 0..4 {
        if x != 2 {
            board.set(x, 3, 1);
        }
    }
    let dot = Shape::from_rows(&[&[1]]);
    assert!(!board.is_collision(2, 3, &dot));

    board.merge(2, 3, &dot, 0);
    let cleared = board.clear_completed_rows();
    assert_eq!(cleared, 1);
    assert_eq!(line_clear_points(cleared), 100);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_four_rows_in_one_pass_score_cascade() {
    let mut board = Board::new(4, 6);
    for y in 2..6 {
        for x in 0..4 {
            board.set(x, y, 3);
        }
    }
    let cleared = board.clear_completed_rows();
    assert_eq!(cleared, 4);
    assert_eq!(line_clear_points(cleared), 1000);
    assert_ne!(line_clear_points(cleared), 400);
}

#[test]
fn test_move_left_at_wall_keeps_origin() {
    let board = Board::new(10, 8);
    let mut pc = PieceController::new(ActivePiece {
        kind: PieceKind::L,
        shape: shape_of(PieceKind::L),
        x: 0,
        y: 3,
        color: 2,
    });

    assert!(!pc.try_move(&board, -1, 0));
    assert_eq!((pc.piece().x, pc.piece().y), (0, 3));
    assert!(pc.try_move(&board, 1, 0));
    assert_eq!(pc.piece().x, 1);
}
