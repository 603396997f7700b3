//! Autoplay engine and session driver.
//!
//! - [`heuristics`]: board features (holes, heights, bumpiness)
//! - [`planner`]: exhaustive placement search and move decomposition
//! - [`autopilot`]: replays one plan per piece, one action at a time
//! - [`session`]: owns the live game, runs gravity and the autopilot, reports game over

pub mod autopilot;
pub mod heuristics;
pub mod planner;
pub mod session;

pub use autopilot::Autopilot;
pub use heuristics::{bumpiness, column_heights, count_holes, max_height, BoardFeatures};
pub use planner::{best_move, best_placement, candidates, evaluate, execute_move, AiMove, AiWeights, Placement};
pub use session::{Request, SessionEvent, Session};
