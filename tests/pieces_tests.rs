//! Shape catalog and collision tests

use stackfall::core::pieces::{get_shape, shape_mask, BOX_SIZE};
use stackfall::core::{collides, Board};
use stackfall::types::{PieceKind, Rotation};

const ROTATIONS: [Rotation; 4] = [Rotation::North, Rotation::East, Rotation::South, Rotation::West];

#[test]
fn test_every_rotation_has_four_distinct_cells_in_box() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            let shape = get_shape(kind, rotation);
            for &(x, y) in shape.iter() {
                assert!((0..BOX_SIZE).contains(&x), "{:?} {:?}", kind, rotation);
                assert!((0..BOX_SIZE).contains(&y), "{:?} {:?}", kind, rotation);
            }

            let mask = shape_mask(kind, rotation);
            let filled = mask.iter().flatten().filter(|&&c| c).count();
            assert_eq!(filled, 4, "{:?} {:?} should cover four cells", kind, rotation);
        }
    }
}

#[test]
fn test_i_piece_shapes() {
    assert_eq!(get_shape(PieceKind::I, Rotation::North), [(0, 1), (1, 1), (2, 1), (3, 1)]);
    assert_eq!(get_shape(PieceKind::I, Rotation::East), [(2, 0), (2, 1), (2, 2), (2, 3)]);
    assert_eq!(get_shape(PieceKind::I, Rotation::South), [(0, 2), (1, 2), (2, 2), (3, 2)]);
    assert_eq!(get_shape(PieceKind::I, Rotation::West), [(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let north = get_shape(PieceKind::O, Rotation::North);
    assert_eq!(north, [(0, 0), (1, 0), (0, 1), (1, 1)]);
    for rotation in ROTATIONS {
        assert_eq!(get_shape(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(get_shape(PieceKind::T, Rotation::North), [(1, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(get_shape(PieceKind::T, Rotation::East), [(1, 0), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(get_shape(PieceKind::T, Rotation::South), [(0, 1), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(get_shape(PieceKind::T, Rotation::West), [(1, 0), (0, 1), (1, 1), (1, 2)]);
}

#[test]
fn test_four_rotations_return_to_start() {
    for rotation in ROTATIONS {
        let back = rotation.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        assert_eq!(back, rotation);
    }
}

#[test]
fn test_collides_with_walls_and_floor() {
    let board = Board::new();

    assert!(!collides(&board, PieceKind::T, Rotation::North, 0, 0));
    assert!(collides(&board, PieceKind::T, Rotation::North, -1, 0));
    // T North spans columns 0..=2 of its box.
    assert!(!collides(&board, PieceKind::T, Rotation::North, 7, 0));
    assert!(collides(&board, PieceKind::T, Rotation::North, 8, 0));
    // Bottom row of the T box is row 1.
    assert!(!collides(&board, PieceKind::T, Rotation::North, 3, 18));
    assert!(collides(&board, PieceKind::T, Rotation::North, 3, 19));
}

#[test]
fn test_cells_above_the_top_never_collide() {
    let board = Board::new();
    // I East occupies box rows 0..=3, so y = -3 leaves one visible cell.
    assert!(!collides(&board, PieceKind::I, Rotation::East, 0, -3));
    // Horizontal bounds still apply above the grid.
    assert!(collides(&board, PieceKind::I, Rotation::North, -1, -5));
}

#[test]
fn test_collides_with_locked_cells() {
    let mut board = Board::new();
    board.set(4, 1, Some(PieceKind::Z));

    assert!(collides(&board, PieceKind::O, Rotation::North, 3, 0));
    assert!(collides(&board, PieceKind::O, Rotation::North, 4, 0));
    assert!(!collides(&board, PieceKind::O, Rotation::North, 5, 0));
    assert!(!collides(&board, PieceKind::O, Rotation::North, 4, 2));
}
