//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule engine, terminal rendering, persistence).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (3, 0), the top-left corner of the piece's 4x4 box
//!
//! # Timing
//!
//! The rule engine runs on abstract ticks. One tick is one frame of a 60 FPS
//! loop (`TICK_MS`). Drop cadence is expressed in ticks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_TICKS` | 70 | Automatic drop delay at level 1 |
//! | `DROP_TICKS_PER_LEVEL` | 8 | Delay removed per level above 1 |
//! | `MILESTONE_BONUS_TICKS` | 4 | Delay removed per 1000 points (max 4 milestones) |
//! | `MIN_DROP_TICKS` | 20 | Absolute floor |
//! | `SOFT_DROP_EVERY_TICKS` | 5 | Soft-drop cadence while held |
//!
//! # Examples
//!
//! ```
//! use stackfall_types::{PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.cell_value(), 6);
//! assert_eq!(PieceKind::from_cell(6), Some(PieceKind::T));
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Highest selectable (and reachable) level
pub const MAX_LEVEL: u32 = 5;

/// Spawn column of the piece box (centers a 4-wide box on a 10-wide board)
pub const SPAWN_X: i8 = 3;

/// Spawn row of the piece box
pub const SPAWN_Y: i8 = 0;

/// Duration of one abstract tick in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Automatic drop delay at level 1, in ticks
pub const BASE_DROP_TICKS: u32 = 70;

/// Ticks removed from the drop delay for every level above 1
pub const DROP_TICKS_PER_LEVEL: u32 = 8;

/// Points per score milestone
pub const SCORE_MILESTONE: u32 = 1000;

/// Milestones beyond this count stop speeding up the drop
pub const MAX_SCORE_MILESTONES: u32 = 4;

/// Ticks removed from the drop delay per score milestone
pub const MILESTONE_BONUS_TICKS: u32 = 4;

/// Drop delay never goes below this many ticks
pub const MIN_DROP_TICKS: u32 = 20;

/// While soft drop is held, a move-down is attempted every N ticks
pub const SOFT_DROP_EVERY_TICKS: u32 = 5;

/// Lines needed per level-up
pub const LINES_PER_LEVEL: u32 = 5;

/// Base points per cleared line (multiplied by the current level)
pub const POINTS_PER_LINE: u32 = 100;


/// The seven tetromino piece kinds, in catalog order
///
/// The discriminant order is the shape identifier used on the board:
/// a cell holding value `k` was locked by the shape with index `k - 1`.
///
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Number of shapes in the catalog
    pub const COUNT: usize = 7;

    /// All shapes in catalog order
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Shape identifier (0-based catalog index)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a shape by catalog index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Board cell value written when this shape locks (1..=7)
    pub fn cell_value(self) -> u8 {
        self as u8 + 1
    }

    /// Decode a board cell value; `0` (empty) and out-of-range values yield `None`
    pub fn from_cell(value: u8) -> Option<Self> {
        match value {
            0 => None,
            v => Self::from_index(v as usize - 1),
        }
    }
}

/// Rotation states of a piece within its 4x4 box
///
/// The cycle goes North → East → South → West → North. There is no
/// counter-clockwise rotation and no wall kicks: a rotation either fits in
/// place or is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Advance one step, `(rotation + 1) mod 4`
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotation identifier (0..4)
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Lifecycle phase of a game session
///
/// Exactly one phase is active at a time. `LevelSelect` is the initial phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    LevelSelect,
    Playing,
    Paused,
    GameOver,
}

/// Discrete, edge-triggered input signals consumed by the rule engine
///
/// Soft drop is not an action: it is a level signal passed to every tick.
/// An action that is not valid in the current phase is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece one step (no kicks)
    Rotate,
    /// Drop, lock, clear and respawn in one step
    HardDrop,
    /// Pause while playing, resume while paused
    TogglePause,
    /// Choose the start level (LevelSelect only, 1..=MAX_LEVEL)
    SelectLevel(u8),
    /// Begin a new game from LevelSelect
    Start,
    /// Return to LevelSelect from Paused or GameOver
    Restart,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
