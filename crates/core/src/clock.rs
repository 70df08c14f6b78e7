//! Fixed-step clock - converts wall-clock milliseconds into rule ticks.
//!
//! The rule engine only understands ticks. A driver measures real elapsed
//! time and pushes it here; the clock reports how many whole ticks are due
//! and keeps the leftover milliseconds for the next frame.

use crate::types::TICK_MS;

/// Upper bound on ticks released by a single `push`
pub const DEFAULT_MAX_CATCH_UP: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStep {
    tick_ms: u32,
    max_catch_up: u32,
    carry_ms: u64,
}

impl FixedStep {
    pub fn new(tick_ms: u32, max_catch_up: u32) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            max_catch_up: max_catch_up.max(1),
            carry_ms: 0,
        }
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Milliseconds accumulated towards the next tick
    pub fn carry_ms(&self) -> u64 {
        self.carry_ms
    }

    /// Milliseconds until the next tick is due
    pub fn until_next_ms(&self) -> u64 {
        u64::from(self.tick_ms).saturating_sub(self.carry_ms)
    }

    /// Add elapsed time and return the number of whole ticks now due.
    ///
    /// When more than `max_catch_up` ticks are owed (the process was
    /// suspended, or a frame stalled) the excess is discarded instead of
    /// replayed in a burst.
    pub fn push(&mut self, elapsed_ms: u64) -> u32 {
        self.carry_ms = self.carry_ms.saturating_add(elapsed_ms);

        let tick_ms = u64::from(self.tick_ms);
        let due = self.carry_ms / tick_ms;
        self.carry_ms %= tick_ms;

        due.min(u64::from(self.max_catch_up)) as u32
    }

    pub fn reset(&mut self) {
        self.carry_ms = 0;
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICK_MS, DEFAULT_MAX_CATCH_UP)
    }
}
