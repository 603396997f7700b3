//! Board features scored by the planner.

use autotris_core::Board;
use autotris_types::{BOARD_COLS, BOARD_ROWS};

/// Height of each column: rows from the topmost occupied cell to the floor,
/// 0 for an empty column.
pub fn column_heights(board: &Board) -> [u32; BOARD_COLS] {
    let mut heights = [0u32; BOARD_COLS];
    for (x, height) in heights.iter_mut().enumerate() {
        let top = (0..BOARD_ROWS).find(|&y| board.is_occupied(x as i8, y as i8));
        *height = top.map_or(0, |y| (BOARD_ROWS - y) as u32);
    }
    heights
}

/// Empty cells with an occupied cell somewhere above them in the same column.
pub fn count_holes(board: &Board) -> u32 {
    let mut holes = 0;
    for x in 0..BOARD_COLS as i8 {
        let mut covered = false;
        for y in 0..BOARD_ROWS as i8 {
            if board.is_occupied(x, y) {
                covered = true;
            } else if covered {
                holes += 1;
            }
        }
    }
    holes
}

pub fn max_height(board: &Board) -> u32 {
    tallest(&column_heights(board))
}

/// Sum of absolute height differences between adjacent columns.
pub fn bumpiness(board: &Board) -> u32 {
    height_steps(&column_heights(board))
}

fn tallest(heights: &[u32]) -> u32 {
    heights.iter().copied().max().unwrap_or(0)
}

fn height_steps(heights: &[u32]) -> u32 {
    heights
        .windows(2)
        .map(|pair| pair[0].abs_diff(pair[1]))
        .sum()
}

/// The three penalized features, measured once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoardFeatures {
    pub holes: u32,
    pub max_height: u32,
    pub bumpiness: u32,
}

impl BoardFeatures {
    pub fn measure(board: &Board) -> Self {
        let heights = column_heights(board);
        Self {
            holes: count_holes(board),
            max_height: tallest(&heights),
            bumpiness: height_steps(&heights),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_features() {
        let board = Board::new();
        assert_eq!(column_heights(&board), [0; BOARD_COLS]);
        assert_eq!(BoardFeatures::measure(&board), BoardFeatures::default());
    }

    #[test]
    fn test_heights_and_bumpiness() {
        let board = Board::from_rows(&[
            "I.........",
            "I.....T...",
            "I....TTT..",
        ]);
        let heights = column_heights(&board);
        assert_eq!(heights[0], 3);
        assert_eq!(heights[5], 1);
        assert_eq!(heights[6], 2);
        assert_eq!(heights[9], 0);
        assert_eq!(max_height(&board), 3);
        // |3-0| + |0-0|*3 + |0-1| + |1-2| + |2-1| + |1-0| + |0-0|
        assert_eq!(bumpiness(&board), 7);
    }

    #[test]
    fn test_holes_count_every_covered_gap() {
        let board = Board::from_rows(&[
            "Z.........",
            "..........",
            "..........",
            "OO........",
        ]);
        // Column 0: two empty cells under the Z. Column 1: none.
        assert_eq!(count_holes(&board), 2);
    }

    #[test]
    fn test_measure_matches_free_functions() {
        let board = Board::from_rows(&["..S.......", ".SS..J....", ".S...JJJ.."]);
        let features = BoardFeatures::measure(&board);
        assert_eq!(features.holes, count_holes(&board));
        assert_eq!(features.max_height, max_height(&board));
        assert_eq!(features.bumpiness, bumpiness(&board));
    }
}
