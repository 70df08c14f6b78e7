//! Piece controller - spawning and validated movement of the falling piece
//!
//! Every operation proposes a candidate placement, asks the collision oracle,
//! and only commits when the candidate is free. Nothing here touches score or
//! lifecycle; the game state layers those on top.

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::{get_shape, PieceShape, SPAWN_POSITION};
use crate::rng::ShapeSource;
use crate::types::{PieceKind, Rotation};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Column of the 4x4 box's top-left corner
    pub x: i8,
    /// Row of the 4x4 box's top-left corner (may be negative)
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Whether this placement collides with the board or its bounds
    pub fn collides(&self, board: &Board) -> bool {
        collides(board, self.kind, self.rotation, self.x, self.y)
    }

    /// Board coordinates of the occupied cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape()
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

/// Result of committing a piece and bringing in the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    /// Rows removed by the clear that followed the lock
    pub cleared: usize,
    /// The freshly spawned piece; not live when `game_over` is set
    pub next: Tetromino,
    /// The spawn collided immediately
    pub game_over: bool,
}

/// Spawn a uniformly chosen (or scripted) shape at the spawn position.
///
/// Returns the piece and whether it collides on arrival. A colliding spawn
/// ends the game; the board is never modified here.
pub fn spawn<S: ShapeSource + ?Sized>(board: &Board, shapes: &mut S) -> (Tetromino, bool) {
    let piece = Tetromino::new(shapes.next_shape());
    let game_over = piece.collides(board);
    (piece, game_over)
}

/// Move by `(dx, dy)` if the target placement is free
pub fn try_move(board: &Board, piece: &mut Tetromino, dx: i8, dy: i8) -> bool {
    let x = piece.x.saturating_add(dx);
    let y = piece.y.saturating_add(dy);

    if collides(board, piece.kind, piece.rotation, x, y) {
        return false;
    }

    piece.x = x;
    piece.y = y;
    true
}

/// Rotate one step in place; no kicks are attempted
pub fn try_rotate(board: &Board, piece: &mut Tetromino) -> bool {
    let rotation = piece.rotation.rotate_cw();

    if collides(board, piece.kind, rotation, piece.x, piece.y) {
        return false;
    }

    piece.rotation = rotation;
    true
}

/// Row the piece box would rest on if dropped straight down now
pub fn ghost_y(board: &Board, piece: &Tetromino) -> i8 {
    let mut y = piece.y;
    while !collides(board, piece.kind, piece.rotation, piece.x, y.saturating_add(1)) {
        y += 1;
    }
    y
}

/// Move the piece down until it lands; returns rows travelled
pub fn drop_to_floor(board: &Board, piece: &mut Tetromino) -> u32 {
    let mut rows = 0;
    while try_move(board, piece, 0, 1) {
        rows += 1;
    }
    rows
}

/// Lock the piece, clear completed rows, then spawn the next piece.
///
/// This is the shared tail of a hard drop and of a timed drop that failed to
/// move the piece.
pub fn lock_and_respawn<S: ShapeSource + ?Sized>(
    board: &mut Board,
    piece: &Tetromino,
    shapes: &mut S,
) -> LockOutcome {
    board.lock_piece(&piece.shape(), piece.x, piece.y, piece.kind);
    let cleared = board.clear_full_rows();
    let (next, game_over) = spawn(board, shapes);

    LockOutcome {
        cleared,
        next,
        game_over,
    }
}

/// Drop to the floor, lock, clear and respawn as one step
pub fn hard_drop<S: ShapeSource + ?Sized>(
    board: &mut Board,
    piece: &mut Tetromino,
    shapes: &mut S,
) -> LockOutcome {
    drop_to_floor(board, piece);
    lock_and_respawn(board, piece, shapes)
}
