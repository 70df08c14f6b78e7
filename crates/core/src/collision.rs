//! Collision oracle - the single placement predicate every move goes through.

use crate::board::Board;
use crate::pieces::get_shape;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether a shape/rotation placed with its box at `(x, y)` collides.
///
/// Horizontal and bottom bounds apply to every occupied cell, including cells
/// above the grid. Board contents are only consulted for rows `>= 0`, so a
/// piece may hang partly above the visible area.
pub fn collides(board: &Board, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
    get_shape(kind, rotation).iter().any(|&(dx, dy)| {
        let col = x.saturating_add(dx);
        let row = y.saturating_add(dy);

        if col < 0 || col >= BOARD_WIDTH as i8 || row >= BOARD_HEIGHT as i8 {
            return true;
        }

        row >= 0 && board.is_occupied(col, row)
    })
}
