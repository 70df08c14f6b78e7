//! Scoring module - score, lines and level progression
//!
//! Every cleared line is worth `POINTS_PER_LINE` times the level in effect
//! when the clear happened. The level itself is derived from the starting
//! level and the total lines cleared, and never exceeds `MAX_LEVEL`.

use crate::types::{LINES_PER_LEVEL, MAX_LEVEL, POINTS_PER_LINE};

/// Points awarded for clearing `lines` rows at `level`
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    lines.saturating_mul(POINTS_PER_LINE).saturating_mul(level)
}

/// Level reached after `total_lines` cleared from `start_level`
pub fn level_for_lines(start_level: u32, total_lines: u32) -> u32 {
    start_level
        .saturating_add(total_lines / LINES_PER_LEVEL)
        .min(MAX_LEVEL)
}

/// Clamp a requested starting level into `1..=MAX_LEVEL`
pub fn clamp_start_level(level: u32) -> u32 {
    level.clamp(1, MAX_LEVEL)
}

/// Running score, line count and level for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    score: u32,
    level: u32,
    lines: u32,
    start_level: u32,
}

impl Progression {
    pub fn new(start_level: u32) -> Self {
        let start_level = clamp_start_level(start_level);
        Self {
            score: 0,
            level: start_level,
            lines: 0,
            start_level,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn start_level(&self) -> u32 {
        self.start_level
    }

    /// Record the rows removed by one lock and return the points awarded.
    ///
    /// Points use the level before this clear is counted, so a clear that
    /// crosses a level boundary is scored at the old level.
    pub fn record_clear(&mut self, cleared: u32) -> u32 {
        if cleared == 0 {
            return 0;
        }

        let points = line_clear_points(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);
        self.level = level_for_lines(self.start_level, self.lines);
        points
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new(1)
    }
}
