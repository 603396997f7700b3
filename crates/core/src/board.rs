//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_COLS, BOARD_HEIGHT, BOARD_ROWS, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_COLS * BOARD_ROWS;

/// The game board - 10 columns x 20 rows using flat array storage
///
/// `Board` is `Copy`-cheap to clone; speculative simulations always work on a clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * BOARD_COLS + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Borrow one row of cells, or `None` past the bottom.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_ROWS {
            return None;
        }
        let start = y * BOARD_COLS;
        Some(&self.cells[start..start + BOARD_COLS])
    }

    /// Fill every cell of a row with `kind`.
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) {
        if y >= BOARD_ROWS {
            return;
        }
        let start = y * BOARD_COLS;
        self.cells[start..start + BOARD_COLS].fill(Some(kind));
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top).
    ///
    /// Rows above each cleared row shift down, and as many empty rows as were
    /// removed are inserted at the top. Remaining rows keep their relative order.
    /// Uses a two-pointer pass with no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, BOARD_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_y = BOARD_ROWS;

        // Scan from bottom to top
        for read_y in (0..BOARD_ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * BOARD_COLS;
                    let dst_start = write_y * BOARD_COLS;
                    self.cells
                        .copy_within(src_start..src_start + BOARD_COLS, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * BOARD_COLS].fill(None);

        cleared_rows
    }

    /// Merge cells into the board permanently.
    ///
    /// Cells above the visible board (y < 0) or outside the grid are dropped;
    /// anything already in a target cell is overwritten.
    pub fn merge_cells(&mut self, cells: impl IntoIterator<Item = (i8, i8)>, kind: PieceKind) {
        for (x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// True iff any cell in the topmost row is occupied.
    pub fn is_top_row_occupied(&self) -> bool {
        self.cells[..BOARD_COLS].iter().any(|cell| cell.is_some())
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a board from row strings, top to bottom.
    ///
    /// `.` is an empty cell and any piece letter fills the cell with that kind.
    /// Missing rows are padded at the top, so callers can describe only the
    /// bottom of the stack. Intended for tests and fixtures.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = BOARD_ROWS.saturating_sub(rows.len());
        for (i, row) in rows.iter().take(BOARD_ROWS).enumerate() {
            for (x, ch) in row.chars().take(BOARD_COLS).enumerate() {
                let cell = PieceKind::from_str(&ch.to_string());
                board.cells[(offset + i) * BOARD_COLS + x] = cell;
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_clear_single_bottom_row() {
        let mut board = Board::new();
        board.fill_row(19, PieceKind::I);
        board.set(4, 18, Some(PieceKind::T));

        let cleared = board.clear_full_rows();

        assert_eq!(cleared.as_slice(), &[19]);
        assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
        assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_clear_full_bottom_row_on_empty_board() {
        let mut board = Board::new();
        board.fill_row(19, PieceKind::L);

        let cleared = board.clear_full_rows();

        assert_eq!(cleared.len(), 1);
        assert!(board.row(19).unwrap().iter().all(|c| c.is_none()));
        assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_clear_non_adjacent_rows_preserves_order() {
        let mut board = Board::from_rows(&[
            "IIIIIIIIII",
            "T.........",
            "OOOOOOOOOO",
            "..S.......",
        ]);

        let cleared = board.clear_full_rows();

        assert_eq!(cleared.len(), 2);
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::T)));
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::S)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_merge_skips_cells_above_board() {
        let mut board = Board::new();
        board.merge_cells([(0, -1), (1, 0), (10, 3)], PieceKind::J);
        assert_eq!(board.filled_count(), 1);
        assert!(board.is_top_row_occupied());
    }

    #[test]
    fn test_from_rows_pads_top() {
        let board = Board::from_rows(&["Z........."]);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::Z)));
        assert_eq!(board.filled_count(), 1);
    }
}
