//! Exhaustive placement search.
//!
//! For every rotation (0-3 steps from the current orientation) and every anchor
//! column the piece can occupy, the planner drops the piece onto a scratch copy
//! of the board, clears lines, and scores the result:
//!
//! ```text
//! value = score' + lines*W_lines - holes*W_holes - max_height*W_height - bumpiness*W_bump
//! ```
//!
//! `score'` is the current score plus a flat 100 points per cleared line at the
//! current level, without the multi-line bonus of the scoring table.
//! The live state is never touched; the chosen move is replayed one primitive
//! action at a time through [`execute_move`].

use log::debug;

use autotris_core::{ghost_position, is_valid_position, GameState, Tetromino};
use autotris_storage::AiSettings;
use autotris_types::{GameAction, RotateDirection, BOARD_WIDTH};

/// Flat per-line credit used when projecting a placement's score.
const LINE_CLEAR_POINTS: u32 = 100;

use crate::heuristics::BoardFeatures;

/// Heuristic weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiWeights {
    pub lines_cleared: f64,
    pub holes: f64,
    pub height: f64,
    pub bumpiness: f64,
}

impl Default for AiWeights {
    fn default() -> Self {
        Self::from(&AiSettings::default())
    }
}

impl From<&AiSettings> for AiWeights {
    fn from(settings: &AiSettings) -> Self {
        Self {
            lines_cleared: settings.lines_cleared_weight,
            holes: settings.holes_weight,
            height: settings.height_weight,
            bumpiness: settings.bumpiness_weight,
        }
    }
}

/// A chosen placement: rotate `rotation` times, slide to `target_x`, drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AiMove {
    pub rotation: u8,
    pub target_x: i8,
    pub hard_drop: bool,
}

/// A scored candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub mv: AiMove,
    pub value: f64,
    /// Piece at its landing position
    pub landing: Tetromino,
    pub lines_cleared: u32,
    pub features: BoardFeatures,
}

/// Weighted value of a hypothetical post-lock position.
pub fn evaluate(score: f64, lines_cleared: u32, features: &BoardFeatures, weights: &AiWeights) -> f64 {
    score + lines_cleared as f64 * weights.lines_cleared
        - features.holes as f64 * weights.holes
        - features.max_height as f64 * weights.height
        - features.bumpiness as f64 * weights.bumpiness
}

/// Score of the hypothetical post-lock state: 100 points per line at the current level.
fn projected_score(state: &GameState, lines_cleared: u32) -> f64 {
    state.score() as f64 + (lines_cleared * LINE_CLEAR_POINTS * state.level()) as f64
}

/// Every legal candidate in search order (rotation-major, then x ascending).
pub fn candidates(state: &GameState, weights: &AiWeights) -> Vec<Placement> {
    let Some(original) = state.current() else {
        return Vec::new();
    };
    let board = state.board();
    let mut out = Vec::new();

    let mut rotated = original;
    for rotation in 0..4u8 {
        if rotation > 0 {
            rotated = rotated.rotated(RotateDirection::Clockwise);
        }

        let size = rotated.shape().size() as i8;
        for x in -1..=(BOARD_WIDTH as i8 - size + 1) {
            let test = rotated.at(x, original.y);
            if !is_valid_position(&test, board) {
                continue;
            }

            let landing = ghost_position(&test, board);
            let mut scratch = board.clone();
            scratch.merge_cells(landing.cells(), landing.kind);
            let lines_cleared = scratch.clear_full_rows().len() as u32;

            let projected_score = projected_score(state, lines_cleared);
            let features = BoardFeatures::measure(&scratch);

            out.push(Placement {
                mv: AiMove {
                    rotation,
                    target_x: x,
                    hard_drop: true,
                },
                value: evaluate(projected_score, lines_cleared, &features, weights),
                landing,
                lines_cleared,
                features,
            });
        }
    }

    out
}

/// Highest-valued placement; the earliest candidate wins ties.
pub fn best_placement(state: &GameState, weights: &AiWeights) -> Option<Placement> {
    let mut best: Option<Placement> = None;
    for candidate in candidates(state, weights) {
        if best.map_or(true, |b| candidate.value > b.value) {
            best = Some(candidate);
        }
    }

    if let Some(placement) = &best {
        debug!(
            "planned {:?}: rotate {} to x={} (value {:.2}, {} line(s))",
            placement.landing.kind,
            placement.mv.rotation,
            placement.mv.target_x,
            placement.value,
            placement.lines_cleared
        );
    }
    best
}

/// Best move for the current piece, or `None` when there is no piece.
pub fn best_move(state: &GameState, weights: &AiWeights) -> Option<AiMove> {
    best_placement(state, weights).map(|placement| placement.mv)
}

/// Next primitive action toward `mv`.
///
/// Rotation is requested while `mv.rotation > 0` without re-checking whether
/// the previous rotation succeeded; callers count it down.
pub fn execute_move(state: &GameState, mv: &AiMove) -> GameAction {
    let Some(piece) = state.current() else {
        return GameAction::Tick;
    };

    if mv.rotation > 0 {
        return GameAction::Rotate;
    }

    if piece.x < mv.target_x {
        GameAction::MoveRight
    } else if piece.x > mv.target_x {
        GameAction::MoveLeft
    } else if mv.hard_drop {
        GameAction::HardDrop
    } else {
        GameAction::SoftDrop
    }
}
