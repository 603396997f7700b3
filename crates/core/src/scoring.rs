//! Scoring module - line clear points, leveling and gravity timing
//!
//! - Line clears score 100/300/500/800 for 1-4 lines, multiplied by the level.
//! - Soft drops (and gravity ticks) score 1 point per row, hard drops 2 per row.
//! - The level is a pure function of total lines: one level per 10 lines above the start level.

use crate::types::{
    BASE_TICK_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES, MIN_TICK_MS, SOFT_DROP_POINTS,
};

/// Calculate line clear score
/// lines: number of lines cleared in one lock (1-4)
/// level: level in effect before the lock
pub fn calculate_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Level after `total_lines` lines, starting from `start_level`
pub fn calculate_level(total_lines: u32, start_level: u32) -> u32 {
    start_level + total_lines / LINES_PER_LEVEL
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells * HARD_DROP_POINTS
    } else {
        cells * SOFT_DROP_POINTS
    }
}

/// Gravity speed factor for a level.
///
/// `base_speed × (0.8 − (level−1)×0.007)^(level−1)`
pub fn drop_speed(level: u32, base_speed: f64) -> f64 {
    let steps = level as f64 - 1.0;
    base_speed * (0.8 - steps * 0.007).powf(steps)
}

/// Interval between gravity ticks for a level, in milliseconds.
///
/// `max(100, 1000 − (level−1)×100×speed)`, truncated to whole milliseconds.
pub fn tick_interval_ms(level: u32, base_speed: f64) -> u64 {
    let speed = drop_speed(level, base_speed);
    let interval = BASE_TICK_MS as f64 - (level as f64 - 1.0) * 100.0 * speed;
    let floor = MIN_TICK_MS as f64;
    if interval.is_nan() || interval < floor {
        MIN_TICK_MS
    } else {
        interval as u64
    }
}
