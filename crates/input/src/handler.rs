//! Per-frame input batching for terminal environments.
//!
//! Edge-triggered actions are queued as keys arrive and handed to the game
//! once per tick. Soft drop is a level signal: it stays held until a release
//! event arrives, or, for terminals that never send one, until no press or
//! repeat has refreshed it for a short timeout.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent};

use crate::map::{handle_key_event, is_soft_drop_key};
use crate::types::GameAction;

/// Maximum actions buffered between two ticks; extra keys are dropped.
pub const MAX_PENDING_ACTIONS: usize = 16;

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" soft drop.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Input for one game step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub actions: ArrayVec<GameAction, MAX_PENDING_ACTIONS>,
    pub soft_drop_held: bool,
}

/// Collects key events between ticks.
#[derive(Debug, Clone)]
pub struct InputHandler {
    pending: ArrayVec<GameAction, MAX_PENDING_ACTIONS>,
    soft_drop_held: bool,
    /// Milliseconds since the soft-drop key was last seen
    soft_drop_idle_ms: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            pending: ArrayVec::new(),
            soft_drop_held: false,
            soft_drop_idle_ms: 0,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// Record a key press; returns the queued action, if any.
    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<GameAction> {
        if is_soft_drop_key(key.code) {
            self.hold_soft_drop();
            return None;
        }

        let action = handle_key_event(key)?;
        let _ = self.pending.try_push(action);
        Some(action)
    }

    /// Record an auto-repeat event.
    ///
    /// Only horizontal movement repeats; a held rotate or hard-drop key
    /// must be pressed again.
    pub fn handle_key_repeat(&mut self, key: KeyEvent) -> Option<GameAction> {
        if is_soft_drop_key(key.code) {
            self.hold_soft_drop();
            return None;
        }

        match handle_key_event(key)? {
            action @ (GameAction::MoveLeft | GameAction::MoveRight) => {
                let _ = self.pending.try_push(action);
                Some(action)
            }
            _ => None,
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if is_soft_drop_key(code) {
            self.soft_drop_held = false;
            self.soft_drop_idle_ms = 0;
        }
    }

    /// Advance the auto-release timer by real elapsed time.
    pub fn update(&mut self, elapsed_ms: u32) {
        if !self.soft_drop_held {
            return;
        }

        self.soft_drop_idle_ms = self.soft_drop_idle_ms.saturating_add(elapsed_ms);
        if self.soft_drop_idle_ms > self.key_release_timeout_ms {
            self.soft_drop_held = false;
            self.soft_drop_idle_ms = 0;
        }
    }

    /// Drain queued actions together with the current soft-drop level.
    pub fn take_frame(&mut self) -> FrameInput {
        FrameInput {
            actions: std::mem::take(&mut self.pending),
            soft_drop_held: self.soft_drop_held,
        }
    }

    pub fn reset(&mut self) {
        self.pending.clear();
        self.soft_drop_held = false;
        self.soft_drop_idle_ms = 0;
    }

    fn hold_soft_drop(&mut self) {
        self.soft_drop_held = true;
        self.soft_drop_idle_ms = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
