//! Piece tests - shapes, spawn positions, the 7-bag

use autotris::core::{get_shape, is_valid_position, Board, PieceBag, Tetromino};
use autotris::types::{PieceKind, RotateDirection, Rotation};

#[test]
fn test_every_shape_has_four_minos() {
    for kind in PieceKind::ALL {
        for i in 0..4 {
            let shape = get_shape(kind, Rotation::from_index(i));
            assert_eq!(shape.minos().len(), 4, "{:?} rotation {}", kind, i);
        }
    }
}

#[test]
fn test_matrix_sizes() {
    for kind in PieceKind::ALL {
        let expected = match kind {
            PieceKind::I | PieceKind::O => 4,
            _ => 3,
        };
        assert_eq!(get_shape(kind, Rotation::North).size(), expected);
    }
}

#[test]
fn test_o_is_rotation_invariant() {
    let o = Tetromino::new(PieceKind::O);
    let turned = o.rotated(RotateDirection::Clockwise);
    let a: Vec<_> = o.cells().collect();
    let b: Vec<_> = turned.cells().collect();
    assert_eq!(a, b);
}

#[test]
fn test_four_rotations_return_to_start() {
    for kind in PieceKind::ALL {
        let piece = Tetromino::new(kind);
        let mut turned = piece;
        for _ in 0..4 {
            turned = turned.rotated(RotateDirection::Clockwise);
        }
        assert_eq!(turned, piece);

        let back = piece
            .rotated(RotateDirection::Clockwise)
            .rotated(RotateDirection::CounterClockwise);
        assert_eq!(back, piece);
    }
}

#[test]
fn test_spawn_positions_are_valid_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let piece = Tetromino::new(kind);
        assert_eq!(piece.x, 3);
        assert_eq!(piece.y, if kind == PieceKind::I { -1 } else { 0 });
        assert!(is_valid_position(&piece, &board));
        // Every spawn shows at least one cell on row 0.
        assert!(piece.cells().any(|(_, y)| y == 0), "{:?}", kind);
    }
}

#[test]
fn test_bag_deals_each_kind_once_per_seven() {
    let mut bag = PieceBag::new(12345);
    for _ in 0..5 {
        let mut seen: Vec<PieceKind> = (0..7).map(|_| bag.draw()).collect();
        seen.sort_by_key(|k| *k as u8);
        assert_eq!(seen, PieceKind::ALL.to_vec());
    }
}

#[test]
fn test_bag_is_deterministic_per_seed() {
    let mut a = PieceBag::new(99);
    let mut b = PieceBag::new(99);
    let xs: Vec<_> = (0..21).map(|_| a.draw()).collect();
    let ys: Vec<_> = (0..21).map(|_| b.draw()).collect();
    assert_eq!(xs, ys);
}
