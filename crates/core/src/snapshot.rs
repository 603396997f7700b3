//! Read-only views of a game for renderers and drivers.
//!
//! The board itself only stores settled kinds. Ghost cells exist only in the
//! rendered grid, so a ghost marker can never be merged into play.

use crate::game_state::GameState;
use crate::geometry::ghost_position;
use crate::pieces::Tetromino;
use crate::types::{PieceKind, Rotation, BOARD_COLS, BOARD_ROWS};

/// One visible cell of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub kind: PieceKind,
    /// Landing projection of the active piece, not a real block.
    pub ghost: bool,
    /// Part of the falling piece rather than the settled stack.
    pub active: bool,
}

impl GridCell {
    pub fn settled(kind: PieceKind) -> Self {
        Self {
            kind,
            ghost: false,
            active: false,
        }
    }
}

/// 20 rows of 10 optional cells, row 0 at the top.
pub type Grid = [[Option<GridCell>; BOARD_COLS]; BOARD_ROWS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a frame needs, copied out of a `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: Option<PieceKind>,
    pub piece_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

fn project(grid: &mut Grid, piece: &Tetromino, ghost: bool) {
    for (x, y) in piece.cells() {
        // Spawn buffer rows are not drawn.
        if y < 0 || x < 0 {
            continue;
        }
        let (x, y) = (x as usize, y as usize);
        if y < BOARD_ROWS && x < BOARD_COLS {
            grid[y][x] = Some(GridCell {
                kind: piece.kind,
                ghost,
                active: !ghost,
            });
        }
    }
}

impl GameState {
    /// Settled board with the ghost (optional) and the active piece drawn on top.
    ///
    /// The ghost is skipped when it coincides with the piece or the game is over.
    pub fn render_grid(&self, show_ghost: bool) -> Grid {
        let mut grid: Grid = [[None; BOARD_COLS]; BOARD_ROWS];
        for (y, row) in grid.iter_mut().enumerate() {
            if let Some(cells) = self.board().row(y) {
                for (slot, cell) in row.iter_mut().zip(cells) {
                    *slot = cell.map(GridCell::settled);
                }
            }
        }

        let Some(piece) = self.current() else {
            return grid;
        };

        if show_ghost && !self.game_over() {
            let ghost = ghost_position(&piece, self.board());
            if ghost.y != piece.y {
                project(&mut grid, &ghost, true);
            }
        }
        project(&mut grid, &piece, false);

        grid
    }

    pub fn snapshot(&self, show_ghost: bool) -> GameSnapshot {
        GameSnapshot {
            grid: self.render_grid(show_ghost),
            active: self.current().map(ActiveSnapshot::from),
            ghost_y: self.ghost_y(),
            next: self.next().map(|piece| piece.kind),
            piece_id: self.piece_id(),
            score: self.score(),
            level: self.level(),
            lines: self.lines(),
            paused: self.paused(),
            game_over: self.game_over(),
        }
    }
}
