//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, storage, or timers:
//!
//! - **Deterministic**: the same seed produces identical games (for AI runs and tests)
//! - **Pure transitions**: every operation returns a new state and leaves its input untouched
//! - **Portable**: runs in the terminal game, the headless autoplayer, and benches alike
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 board of settled cells and line clearing
//! - [`pieces`]: fixed rotation matrices and the active piece value
//! - [`rng`]: seeded 7-bag piece generation
//! - [`geometry`]: placement validity and landing projection
//! - [`game_state`]: the state machine (moves, kicks, drops, locking, leveling)
//! - [`scoring`]: line clear and drop points, level and gravity timing
//! - [`snapshot`]: rendered grid with ghost cells, frame snapshots
//!
//! # Rules
//!
//! - Rows above the board form a spawn buffer checked only against the walls
//! - Rotation selects the next matrix and falls back to five kicks
//! - Line clears score 100/300/500/800 times the level before the lock
//! - A game ends when the top row is still occupied after a lock
//!
//! # Example
//!
//! ```
//! use autotris_core::GameState;
//! use autotris_types::GameAction;
//!
//! let mut game = GameState::with_seed(1, 12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! The core owns no timers. A driver calls `tick` every
//! [`tick_interval_ms`](scoring::tick_interval_ms) milliseconds.

pub mod board;
pub mod game_state;
pub mod geometry;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use autotris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, LockOutcome, WALL_KICKS};
pub use geometry::{ghost_position, ghost_y, is_valid_position};
pub use pieces::{create_piece, get_shape, ShapeMatrix, Tetromino};
pub use rng::{PieceBag, SimpleRng};
pub use scoring::{
    calculate_drop_score, calculate_level, calculate_score, drop_speed, tick_interval_ms,
};
pub use snapshot::{ActiveSnapshot, GameSnapshot, Grid, GridCell};
