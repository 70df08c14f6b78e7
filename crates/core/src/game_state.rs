//! Game state module - the session object and its lifecycle
//!
//! `GameState` owns the board, the falling piece, the shape source and the
//! progression counters. All of them are reached only through the lifecycle
//! gates here: LevelSelect → Playing ⇄ Paused, Playing → GameOver, and
//! Paused/GameOver → LevelSelect. Requests that do not fit the current phase
//! return `false` and change nothing.

use crate::board::Board;
use crate::controller::{self, LockOutcome, Tetromino};
use crate::rng::{ShapeSource, UniformShapes};
use crate::scheduler::{drop_delay_ticks, DropTimer};
use crate::scoring::Progression;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GamePhase, MAX_LEVEL, TICK_MS};

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState<S = UniformShapes> {
    board: Board,
    active: Option<Tetromino>,
    shapes: S,
    phase: GamePhase,
    selected_level: u32,
    progression: Progression,
    drop_timer: DropTimer,
    /// Play time accumulated while Playing
    elapsed_ms: u64,
    high_score: u32,
    /// New high score waiting to be persisted
    pending_high_score: Option<u32>,
}

impl GameState<UniformShapes> {
    /// Create a new session drawing uniformly random shapes from `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_shapes(UniformShapes::new(seed))
    }
}

impl Default for GameState<UniformShapes> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: ShapeSource> GameState<S> {
    /// Create a new session in LevelSelect using the given shape source
    pub fn with_shapes(shapes: S) -> Self {
        Self {
            board: Board::new(),
            active: None,
            shapes,
            phase: GamePhase::LevelSelect,
            selected_level: 1,
            progression: Progression::new(1),
            drop_timer: DropTimer::new(),
            elapsed_ms: 0,
            high_score: 0,
            pending_high_score: None,
        }
    }

    /// Seed the session with a previously persisted high score
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn shapes(&self) -> &S {
        &self.shapes
    }

    pub fn selected_level(&self) -> u32 {
        self.selected_level
    }

    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn lines(&self) -> u32 {
        self.progression.lines()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn drop_counter(&self) -> u32 {
        self.drop_timer.counter()
    }

    /// Ticks between gravity steps at the current level and score
    pub fn drop_delay_ticks(&self) -> u32 {
        drop_delay_ticks(self.progression.level(), self.progression.score())
    }

    /// Box row the active piece would land on
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(controller::ghost_y(&self.board, &active))
    }

    /// Choose the starting level (LevelSelect only, `1..=MAX_LEVEL`)
    pub fn select_level(&mut self, level: u32) -> bool {
        if self.phase != GamePhase::LevelSelect || !(1..=MAX_LEVEL).contains(&level) {
            return false;
        }
        self.selected_level = level;
        true
    }

    /// Begin a new game from LevelSelect.
    ///
    /// The board, progression, drop counter and play time are reset before
    /// the first piece spawns. A first spawn that already collides goes
    /// straight to GameOver.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::LevelSelect {
            return false;
        }

        self.board.clear();
        self.progression = Progression::new(self.selected_level);
        self.drop_timer.reset();
        self.elapsed_ms = 0;
        self.phase = GamePhase::Playing;

        let (piece, game_over) = controller::spawn(&self.board, &mut self.shapes);
        if game_over {
            self.end_game();
        } else {
            self.active = Some(piece);
        }
        true
    }

    /// Pause while Playing, resume while Paused
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            _ => return false,
        };
        true
    }

    /// Return to LevelSelect from Paused or GameOver.
    ///
    /// The live piece is discarded. The board keeps its cells until the next
    /// `start` so the last game stays visible behind the level list.
    pub fn restart(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Paused | GamePhase::GameOver) {
            return false;
        }
        self.active = None;
        self.drop_timer.reset();
        self.phase = GamePhase::LevelSelect;
        true
    }

    /// Move the active piece; only while Playing
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        controller::try_move(&self.board, active, dx, dy)
    }

    /// Rotate the active piece one step; only while Playing
    pub fn try_rotate(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        controller::try_rotate(&self.board, active)
    }

    /// Drop, lock, clear and respawn in one step; only while Playing
    pub fn hard_drop(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let Some(mut active) = self.active.take() else {
            return false;
        };

        controller::drop_to_floor(&self.board, &mut active);
        self.lock_active(active);
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::SelectLevel(level) => self.select_level(u32::from(level)),
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Advance one fixed tick.
    ///
    /// Only runs while Playing: adds `TICK_MS` of play time, applies the held
    /// soft drop on its cadence, then the timed drop. A timed drop that cannot
    /// move the piece locks it. Returns whether the piece moved or locked.
    pub fn tick(&mut self, soft_drop_held: bool) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let Some(mut active) = self.active else {
            return false;
        };

        self.elapsed_ms = self.elapsed_ms.saturating_add(u64::from(TICK_MS));

        let delay = self.drop_delay_ticks();
        let signal = self.drop_timer.advance(soft_drop_held, delay);

        let mut changed = false;
        if signal.soft_drop {
            changed |= controller::try_move(&self.board, &mut active, 0, 1);
        }

        if signal.gravity && !controller::try_move(&self.board, &mut active, 0, 1) {
            self.active = None;
            self.lock_active(active);
            return true;
        }
        changed |= signal.gravity;

        self.active = Some(active);
        changed
    }

    /// Apply one input batch, then advance one tick.
    ///
    /// Player actions always go first, so a hard drop pre-empts the same
    /// tick's timed drop (which then acts on the fresh piece).
    pub fn step(&mut self, actions: &[GameAction], soft_drop_held: bool) -> bool {
        let mut changed = false;
        for &action in actions {
            changed |= self.apply_action(action);
        }
        changed |= self.tick(soft_drop_held);
        changed
    }

    /// The new high score, once, after a game that beat the stored one
    pub fn take_high_score_update(&mut self) -> Option<u32> {
        self.pending_high_score.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.phase = self.phase;
        out.selected_level = self.selected_level;
        out.score = self.progression.score();
        out.level = self.progression.level();
        out.lines = self.progression.lines();
        out.high_score = self.high_score;
        out.elapsed_ms = self.elapsed_ms;
        out.drop_counter = self.drop_timer.counter();
        out.drop_delay = self.drop_delay_ticks();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Lock a piece that has already left `self.active`, score the clear and
    /// bring in the next piece.
    fn lock_active(&mut self, piece: Tetromino) {
        let LockOutcome {
            cleared,
            next,
            game_over,
        } = controller::lock_and_respawn(&mut self.board, &piece, &mut self.shapes);

        self.progression.record_clear(cleared as u32);

        if game_over {
            self.end_game();
        } else {
            self.active = Some(next);
        }
    }

    fn end_game(&mut self) {
        self.active = None;
        self.phase = GamePhase::GameOver;

        let score = self.progression.score();
        if score > self.high_score {
            self.high_score = score;
            self.pending_high_score = Some(score);
        }
    }
}
