//! Drop scheduler - gravity cadence measured in fixed ticks
//!
//! A single counter advances once per tick. Gravity fires when it reaches the
//! current drop delay, and the held soft drop fires on every fifth count.

use crate::types::{
    BASE_DROP_TICKS, DROP_TICKS_PER_LEVEL, MAX_SCORE_MILESTONES, MILESTONE_BONUS_TICKS,
    MIN_DROP_TICKS, SCORE_MILESTONE, SOFT_DROP_EVERY_TICKS,
};

/// Ticks between gravity steps for the given level and score.
///
/// Each level above 1 removes `DROP_TICKS_PER_LEVEL` ticks; every 1000 points
/// removes `MILESTONE_BONUS_TICKS` more, up to four milestones. The result
/// never goes below `MIN_DROP_TICKS`.
pub fn drop_delay_ticks(level: u32, score: u32) -> u32 {
    let level_speedup = level.saturating_sub(1).saturating_mul(DROP_TICKS_PER_LEVEL);
    let milestones = (score / SCORE_MILESTONE).min(MAX_SCORE_MILESTONES);
    let score_speedup = milestones * MILESTONE_BONUS_TICKS;

    BASE_DROP_TICKS
        .saturating_sub(level_speedup)
        .saturating_sub(score_speedup)
        .max(MIN_DROP_TICKS)
}

/// What one tick of the drop timer asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropSignal {
    /// Move the piece down one row because soft drop is held
    pub soft_drop: bool,
    /// Timed drop: move down one row, locking if that fails
    pub gravity: bool,
}

/// Tick counter driving gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropTimer {
    counter: u32,
}

impl DropTimer {
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Advance by one tick.
    ///
    /// The soft-drop check reads the counter before it is incremented, so the
    /// first held tick after a reset already moves the piece.
    pub fn advance(&mut self, soft_drop_held: bool, delay: u32) -> DropSignal {
        let soft_drop = soft_drop_held && self.counter % SOFT_DROP_EVERY_TICKS == 0;

        self.counter = self.counter.saturating_add(1);

        let gravity = self.counter >= delay;
        if gravity {
            self.counter = 0;
        }

        DropSignal { soft_drop, gravity }
    }
}
