//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and batches them
//! per tick together with the held soft-drop signal (including terminals
//! without key-release events).

pub mod handler;
pub mod map;

pub use stackfall_types as types;

pub use handler::{FrameInput, InputHandler};
pub use map::{handle_key_event, is_soft_drop_key, should_quit};
