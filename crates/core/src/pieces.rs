//! Pieces module - tetromino shape tables and the active piece value
//!
//! Every kind owns four fixed rotation matrices (4x4 for I and O, 3x3 for the
//! rest). Rotating never transforms a matrix; it only selects another table entry.

use crate::rng::PieceBag;
use crate::types::{PieceKind, RotateDirection, Rotation, SPAWN_X};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// A square matrix of filled/empty flags, 3x3 or 4x4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    rows: [[u8; 4]; 4],
}

impl ShapeMatrix {
    const fn square3(m: [[u8; 3]; 3]) -> Self {
        let mut rows = [[0u8; 4]; 4];
        let mut y = 0;
        while y < 3 {
            let mut x = 0;
            while x < 3 {
                rows[y][x] = m[y][x];
                x += 1;
            }
            y += 1;
        }
        Self { size: 3, rows }
    }

    const fn square4(rows: [[u8; 4]; 4]) -> Self {
        Self { size: 4, rows }
    }

    /// Matrix side length (3 or 4). The AI planner uses this as the piece width.
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size as usize && y < self.size as usize && self.rows[y][x] != 0
    }

    /// Offsets of the filled cells, in row-major order.
    pub fn minos(&self) -> PieceShape {
        let mut out = [(0, 0); 4];
        let mut n = 0usize;
        for y in 0..self.size as usize {
            for x in 0..self.size as usize {
                if self.rows[y][x] != 0 && n < out.len() {
                    out[n] = (x as i8, y as i8);
                    n += 1;
                }
            }
        }
        out
    }

    /// Rows of the matrix as flag slices (for previews).
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let size = self.size as usize;
        self.rows[..size].iter().map(move |row| &row[..size])
    }
}

const I_SHAPES: [ShapeMatrix; 4] = [
    ShapeMatrix::square4([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
    ShapeMatrix::square4([[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]]),
    ShapeMatrix::square4([[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0]]),
    ShapeMatrix::square4([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]),
];

const O_MATRIX: ShapeMatrix =
    ShapeMatrix::square4([[0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

/// O piece shapes (same for all rotations)
const O_SHAPES: [ShapeMatrix; 4] = [O_MATRIX; 4];

const T_SHAPES: [ShapeMatrix; 4] = [
    ShapeMatrix::square3([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
    ShapeMatrix::square3([[0, 1, 0], [0, 1, 1], [0, 1, 0]]),
    ShapeMatrix::square3([[0, 0, 0], [1, 1, 1], [0, 1, 0]]),
    ShapeMatrix::square3([[0, 1, 0], [1, 1, 0], [0, 1, 0]]),
];

const S_SHAPES: [ShapeMatrix; 4] = [
    ShapeMatrix::square3([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
    ShapeMatrix::square3([[0, 1, 0], [0, 1, 1], [0, 0, 1]]),
    ShapeMatrix::square3([[0, 0, 0], [0, 1, 1], [1, 1, 0]]),
    ShapeMatrix::square3([[1, 0, 0], [1, 1, 0], [0, 1, 0]]),
];

const Z_SHAPES: [ShapeMatrix; 4] = [
    ShapeMatrix::square3([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
    ShapeMatrix::square3([[0, 0, 1], [0, 1, 1], [0, 1, 0]]),
    ShapeMatrix::square3([[0, 0, 0], [1, 1, 0], [0, 1, 1]]),
    ShapeMatrix::square3([[0, 1, 0], [1, 1, 0], [1, 0, 0]]),
];

const J_SHAPES: [ShapeMatrix; 4] = [
    ShapeMatrix::square3([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
    ShapeMatrix::square3([[0, 1, 1], [0, 1, 0], [0, 1, 0]]),
    ShapeMatrix::square3([[0, 0, 0], [1, 1, 1], [0, 0, 1]]),
    ShapeMatrix::square3([[0, 1, 0], [0, 1, 0], [1, 1, 0]]),
];

const L_SHAPES: [ShapeMatrix; 4] = [
    ShapeMatrix::square3([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
    ShapeMatrix::square3([[0, 1, 0], [0, 1, 0], [0, 1, 1]]),
    ShapeMatrix::square3([[0, 0, 0], [1, 1, 1], [1, 0, 0]]),
    ShapeMatrix::square3([[1, 1, 0], [0, 1, 0], [0, 1, 0]]),
];

/// Get the fixed matrix for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> &'static ShapeMatrix {
    let table = match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    };
    &table[rotation.index()]
}

/// Spawn row for a kind. The 4-row I matrix starts one row higher so its
/// filled row enters the board at row 0.
pub fn spawn_y(kind: PieceKind) -> i8 {
    match kind {
        PieceKind::I => -1,
        _ => 0,
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at its spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: spawn_y(kind),
        }
    }

    /// Get the matrix for the current rotation
    pub fn shape(&self) -> &'static ShapeMatrix {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape()
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// Same piece translated by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its anchor moved to (x, y)
    pub fn at(&self, x: i8, y: i8) -> Self {
        Self { x, y, ..*self }
    }

    /// Same piece one rotation step further; the anchor is unchanged.
    pub fn rotated(&self, direction: RotateDirection) -> Self {
        Self {
            rotation: self.rotation.step(direction),
            ..*self
        }
    }
}

/// Create a piece at its spawn position, drawing the kind from `bag` when none is given.
pub fn create_piece(kind: Option<PieceKind>, bag: &mut PieceBag) -> Tetromino {
    Tetromino::new(kind.unwrap_or_else(|| bag.draw()))
}
