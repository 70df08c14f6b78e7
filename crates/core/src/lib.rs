//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminals, files, or wall clocks, making it:
//!
//! - **Deterministic**: Same seed (or scripted shape list) produces identical games
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shapes, four rotations each, as cells in a 4x4 box
//! - [`board`]: 10x20 grid with locking and row clearing
//! - [`collision`]: the placement predicate
//! - [`controller`]: spawn, move, rotate, hard drop
//! - [`scoring`]: score, lines and level
//! - [`scheduler`]: drop delay and the per-tick drop counter
//! - [`game_state`]: the session and its LevelSelect/Playing/Paused/GameOver lifecycle
//! - [`rng`]: injectable shape sources
//! - [`clock`]: real milliseconds to fixed ticks
//! - [`snapshot`]: read-only state for renderers
//!
//! # Game Rules
//!
//! - **Uniform spawns**: every piece is one of seven shapes with equal odds
//! - **Plain rotation**: one step clockwise, accepted in place or rejected; no kicks
//! - **Immediate lock**: a timed drop that cannot move the piece locks it
//! - **Scoring**: `lines * 100 * level`, level rises every five lines up to 5
//! - **Ghost Piece**: Shows where the current piece will land
//!
//! # Example
//!
//! ```
//! use stackfall_core::GameState;
//! use stackfall_types::{GameAction, GamePhase};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::SelectLevel(2));
//! game.apply_action(GameAction::Start);
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // One lock, no full rows yet.
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The rules advance in fixed ticks of `TICK_MS` (16ms, one 60 FPS frame).
//! A driver converts wall-clock time into ticks with [`clock::FixedStep`] and
//! calls [`GameState::tick`](game_state::GameState::tick) once per tick.

pub mod board;
pub mod clock;
pub mod collision;
pub mod controller;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use stackfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::FixedStep;
pub use collision::collides;
pub use controller::{LockOutcome, Tetromino};
pub use game_state::GameState;
pub use pieces::{get_shape, shape_mask};
pub use rng::{ScriptedShapes, ShapeSource, SimpleRng, UniformShapes};
pub use scheduler::{drop_delay_ticks, DropTimer};
pub use scoring::{line_clear_points, Progression};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
