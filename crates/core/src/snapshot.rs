//! Read-only view of the game for renderers.
//!
//! The snapshot is `Copy` and fixed-size so a driver can refill the same
//! value every frame without allocating.

use crate::controller::Tetromino;
use crate::types::{GamePhase, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, MIN_DROP_TICKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

impl From<ActiveSnapshot> for Tetromino {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Cell values: 0 empty, `k` for shape index `k - 1`
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Box row the active piece would land at
    pub ghost_y: Option<i8>,
    pub phase: GamePhase,
    /// Level highlighted on the level-select screen
    pub selected_level: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub high_score: u32,
    /// Play time accumulated while Playing
    pub elapsed_ms: u64,
    pub drop_counter: u32,
    pub drop_delay: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing && self.active.is_some()
    }

    /// Whole seconds of play time
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            phase: GamePhase::LevelSelect,
            selected_level: 1,
            score: 0,
            level: 1,
            lines: 0,
            high_score: 0,
            elapsed_ms: 0,
            drop_counter: 0,
            drop_delay: MIN_DROP_TICKS,
        }
    }
}
