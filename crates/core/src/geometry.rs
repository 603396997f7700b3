//! Geometry module - placement validity and landing projection
//!
//! Rows above the board (y < 0) form a spawn buffer: cells there are only
//! checked against the side walls, never against occupancy.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether every filled cell of `piece` fits on `board`.
pub fn is_valid_position(piece: &Tetromino, board: &Board) -> bool {
    piece.cells().all(|(x, y)| {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        y < 0 || !board.is_occupied(x, y)
    })
}

/// Calculate the ghost piece Y position (where the piece would land).
///
/// Steps the anchor down one row at a time while the piece stays valid and
/// returns the last valid row. The anchor column is unchanged.
pub fn ghost_y(piece: &Tetromino, board: &Board) -> i8 {
    let mut y = piece.y;
    while is_valid_position(&piece.at(piece.x, y + 1), board) {
        y += 1;
    }
    y
}

/// The piece moved to its landing row.
pub fn ghost_position(piece: &Tetromino, board: &Board) -> Tetromino {
    piece.at(piece.x, ghost_y(piece, board))
}
