//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, AI planning, terminal rendering).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (3, 0), or (3, -1) for the I piece
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SOFT_DROP_POINTS` | 1 | Points per row of soft drop (and per gravity tick) |
//! | `HARD_DROP_POINTS` | 2 | Points per row of hard drop |
//! | `LINE_SCORES` | 0/100/300/500/800 | Line clear points, multiplied by level |
//! | `LINES_PER_LEVEL` | 10 | Lines needed per level |
//!
//! # Examples
//!
//! ```
//! use autotris_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::from_index(-1), Rotation::West);
//!
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Board width as `usize`, for array lengths.
pub const BOARD_COLS: usize = BOARD_WIDTH as usize;

/// Board height as `usize`, for array lengths.
pub const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

/// Anchor column for freshly spawned pieces.
pub const SPAWN_X: i8 = 3;

/// Points awarded per row moved by a soft drop or gravity tick.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points awarded per row travelled by a hard drop.
pub const HARD_DROP_POINTS: u32 = 2;

/// Line clear scoring table, indexed by lines cleared in one lock.
///
/// Points are multiplied by the level in effect before the lock.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Lowest selectable start level.
pub const MIN_START_LEVEL: u32 = 1;

/// Highest selectable start level.
pub const MAX_START_LEVEL: u32 = 10;

/// Gravity interval at level 1, in milliseconds.
pub const BASE_TICK_MS: u64 = 1000;

/// Gravity interval floor, in milliseconds.
pub const MIN_TICK_MS: u64 = 100;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical bag order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use autotris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "I" => Some(PieceKind::I),
            "O" => Some(PieceKind::O),
            "T" => Some(PieceKind::T),
            "S" => Some(PieceKind::S),
            "Z" => Some(PieceKind::Z),
            "J" => Some(PieceKind::J),
            "L" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation states, indexed 0-3.
///
/// - **North** (0): spawn orientation
/// - **East** (1): one clockwise step
/// - **South** (2): two steps
/// - **West** (3): one counter-clockwise step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Index of this rotation state (0-3).
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for an arbitrary index, wrapped mod 4 (negative values wrap too).
    ///
    /// ```
    /// use autotris_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(0), Rotation::North);
    /// assert_eq!(Rotation::from_index(5), Rotation::East);
    /// assert_eq!(Rotation::from_index(-1), Rotation::West);
    /// ```
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Advance one step in the given direction.
    pub fn step(&self, direction: RotateDirection) -> Self {
        Self::from_index(self.index() as i32 + direction.delta())
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        self.step(RotateDirection::Clockwise)
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        self.step(RotateDirection::CounterClockwise)
    }
}

/// Direction of a single rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotateDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    /// Signed index delta: +1 for clockwise, -1 for counter-clockwise.
    pub fn delta(&self) -> i32 {
        match self {
            RotateDirection::Clockwise => 1,
            RotateDirection::CounterClockwise => -1,
        }
    }
}

/// Primitive gameplay actions.
///
/// These are shared by human input, the gravity timer and the AI autopilot.
/// Requests that carry a payload (restart, new game, AI toggle) live on the
/// engine's session layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece one step clockwise
    Rotate,
    /// Move piece one row down, locking it if it cannot move
    SoftDrop,
    /// Drop piece to its landing row and lock it
    HardDrop,
    /// Gravity step (same transition as soft drop)
    Tick,
    /// Set the paused flag
    Pause,
    /// Clear the paused flag
    Resume,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use autotris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "tick" => Some(GameAction::Tick),
            "pause" => Some(GameAction::Pause),
            "resume" => Some(GameAction::Resume),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Tick => "tick",
            GameAction::Pause => "pause",
            GameAction::Resume => "resume",
        }
    }

    /// Whether this action moves the active piece (and is therefore gated
    /// while paused or after game over).
    pub fn is_gameplay(&self) -> bool {
        !matches!(self, GameAction::Pause | GameAction::Resume)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_score_table_matches_classic_values() {
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert_eq!(SOFT_DROP_POINTS, 1);
        assert_eq!(HARD_DROP_POINTS, 2);
    }

    #[test]
    fn rotation_wraps_in_both_directions() {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::North);

        assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
        assert_eq!(Rotation::East.rotate_cw().rotate_ccw(), Rotation::East);
    }

    #[test]
    fn action_names_round_trip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Rotate,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::Tick,
            GameAction::Pause,
            GameAction::Resume,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert!(!GameAction::Pause.is_gameplay());
        assert!(GameAction::Tick.is_gameplay());
    }
}
