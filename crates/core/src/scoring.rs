//! Scoring module - classic line-clear points, leveling, and gravity speed
//!
//! - Points for `n` lines in one lock: `LINE_SCORES[n] * level`
//! - Level: `lines / 10 + 1`
//! - Gravity: `max(100, 1000 - (level - 1) * 100)` milliseconds per row

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows at once at `level`.
///
/// More than four lines cannot come from a single lock and scores nothing.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for `level`, floored at `DROP_INTERVAL_MIN_MS`
pub fn drop_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(DROP_INTERVAL_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(reduction)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Result of awarding one lock's line clears to the running totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub points: u32,
    pub level: u32,
    pub level_up: bool,
}

/// Score `lines` cleared at `level` with `total_lines` already banked.
///
/// The level only ever moves up.
pub fn calculate_score(lines: usize, level: u32, total_lines: u32) -> ScoreResult {
    let points = line_clear_points(lines, level);
    let reached = level_for_lines(total_lines.saturating_add(lines as u32));
    ScoreResult {
        points,
        level: reached.max(level),
        level_up: reached > level,
    }
}
