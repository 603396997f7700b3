//! Board tests - occupancy, bounds and line clearing through the public API

use autotris::core::Board;
use autotris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_dimensions() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 200);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_out_of_bounds_is_rejected() {
    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 20), None);
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.is_occupied(-1, 5));
}

#[test]
fn test_set_and_get() {
    let mut board = Board::new();
    assert!(board.set(3, 7, Some(PieceKind::S)));
    assert_eq!(board.get(3, 7), Some(Some(PieceKind::S)));
    assert!(board.is_occupied(3, 7));
    assert!(!board.is_occupied(4, 7));
}

#[test]
fn test_from_rows_pads_at_the_top() {
    let board = Board::from_rows(&["T.........", "IIIIIIIIII"]);
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));
    assert_eq!(board.get(0, 18), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 11);
}

#[test]
fn test_clear_keeps_order_of_remaining_rows() {
    let mut board = Board::from_rows(&[
        "S.........",
        "IIIIIIIIII",
        ".Z........",
        "OOOOOOOOOO",
        "..L.......",
    ]);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    // The three partial rows settle at the bottom in their original order.
    assert_eq!(board.get(2, 19), Some(Some(PieceKind::L)));
    assert_eq!(board.get(1, 18), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(0, 17), Some(Some(PieceKind::S)));
    assert_eq!(board.filled_count(), 3);
    assert!((0..17).all(|y| board.row(y).unwrap().iter().all(|c| c.is_none())));
}

#[test]
fn test_clear_with_no_full_rows_is_a_no_op() {
    let mut board = Board::from_rows(&["IIIII.IIII"]);
    let before = board.clone();
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_merge_drops_cells_above_the_board() {
    let mut board = Board::new();
    board.merge_cells([(4, -1), (4, 0), (5, 0)], PieceKind::J);
    assert_eq!(board.filled_count(), 2);
    assert!(board.is_top_row_occupied());
}
