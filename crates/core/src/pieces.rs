//! Pieces module - the shape catalog
//!
//! Every shape has four rotation states, each a set of four occupied cells
//! inside a 4x4 box. Offsets are `(col, row)` relative to the box's top-left
//! corner, listed in row-major order.

use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// Offset of a single mino relative to the piece box origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the box origin
pub type PieceShape = [MinoOffset; 4];

/// Side length of the bounding box every shape lives in
pub const BOX_SIZE: i8 = 4;

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => get_i_shape(rotation),
        PieceKind::J => get_j_shape(rotation),
        PieceKind::L => get_l_shape(rotation),
        PieceKind::O => get_o_shape(rotation),
        PieceKind::S => get_s_shape(rotation),
        PieceKind::T => get_t_shape(rotation),
        PieceKind::Z => get_z_shape(rotation),
    }
}

/// Occupancy of the 4x4 box as `mask[row][col]`
pub fn shape_mask(kind: PieceKind, rotation: Rotation) -> [[bool; 4]; 4] {
    let mut mask = [[false; 4]; 4];
    for (col, row) in get_shape(kind, rotation) {
        mask[row as usize][col as usize] = true;
    }
    mask
}

/// I piece shapes
fn get_i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        // N: horizontal on row 1
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        // E: vertical on column 2
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        // S: horizontal on row 2
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        // W: vertical on column 1
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// J piece shapes
fn get_j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

/// L piece shapes
fn get_l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// O piece shapes (same for all rotations, top-left 2x2 of the box)
fn get_o_shape(_rotation: Rotation) -> PieceShape {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

/// S piece shapes
fn get_s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// T piece shapes
fn get_t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// Z piece shapes
fn get_z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

/// Spawn position for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = (SPAWN_X, SPAWN_Y);
