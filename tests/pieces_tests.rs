//! Pieces tests - shape table, rotation mapper and placement validator

use std::collections::HashSet;

use tty_tetris::core::{fits, occupied_cells, pattern, rotated_index, Board, Pattern};
use tty_tetris::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, PIECE_CELLS};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

/// Materialise a pattern as seen under `rotation`.
fn rotate_pattern(p: &Pattern, rotation: Rotation) -> Pattern {
    let mut out = [0; PIECE_CELLS];
    for y in 0..4u8 {
        for x in 0..4u8 {
            out[(x + y * 4) as usize] = p[rotated_index(x, y, rotation)];
        }
    }
    out
}

// ============== Rotation Mapper ==============

#[test]
fn test_rotated_index_is_bijection() {
    for rotation in ROTATIONS {
        let indices: HashSet<usize> = (0..4u8)
            .flat_map(|y| (0..4u8).map(move |x| rotated_index(x, y, rotation)))
            .collect();
        assert_eq!(indices.len(), PIECE_CELLS, "{:?} is not one-to-one", rotation);
        assert!(indices.iter().all(|&i| i < PIECE_CELLS));
    }
}

#[test]
fn test_inverse_rotation_restores_pattern() {
    for kind in PieceKind::ALL {
        let original = *pattern(kind);
        for rotation in ROTATIONS {
            let inverse = Rotation::from_index(4 - rotation.index());
            let rotated = rotate_pattern(&original, rotation);
            assert_eq!(
                rotate_pattern(&rotated, inverse),
                original,
                "{:?} {:?} then {:?}",
                kind,
                rotation,
                inverse
            );
        }
    }
}

#[test]
fn test_quarter_turns_compose() {
    for kind in PieceKind::ALL {
        let mut p = *pattern(kind);
        for rotation in ROTATIONS {
            assert_eq!(rotate_pattern(pattern(kind), rotation), p, "{:?} {:?}", kind, rotation);
            p = rotate_pattern(&p, Rotation::East);
        }
        assert_eq!(&p, pattern(kind));
    }
}

#[test]
fn test_every_orientation_has_four_cells() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            assert_eq!(occupied_cells(kind, rotation).count(), 4);
        }
    }
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let north: Vec<_> = occupied_cells(PieceKind::O, Rotation::North).collect();
    for rotation in ROTATIONS {
        let cells: Vec<_> = occupied_cells(PieceKind::O, rotation).collect();
        assert_eq!(cells, north);
    }
}

// ============== Placement Validator ==============

#[test]
fn test_inside_empty_board_is_valid() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            for y in 0..=(BOARD_HEIGHT as i8 - 4) {
                for x in 0..=(BOARD_WIDTH as i8 - 4) {
                    assert!(fits(&board, kind, rotation, x, y), "{:?} {:?} at ({}, {})", kind, rotation, x, y);
                }
            }
        }
    }
}

#[test]
fn test_overlap_is_invalid() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            for (dx, dy) in occupied_cells(kind, rotation) {
                let mut board = Board::new();
                board.set(5 + dx, 8 + dy, Some(PieceKind::Z));
                assert!(!fits(&board, kind, rotation, 5, 8));
            }
        }
    }
}

#[test]
fn test_cells_outside_side_walls_are_invalid() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            let min_dx = occupied_cells(kind, rotation).map(|(dx, _)| dx).min().unwrap();
            let max_dx = occupied_cells(kind, rotation).map(|(dx, _)| dx).max().unwrap();

            assert!(fits(&board, kind, rotation, -min_dx, 5));
            assert!(!fits(&board, kind, rotation, -min_dx - 1, 5));
            assert!(fits(&board, kind, rotation, BOARD_WIDTH as i8 - 1 - max_dx, 5));
            assert!(!fits(&board, kind, rotation, BOARD_WIDTH as i8 - max_dx, 5));
        }
    }
}

#[test]
fn test_piece_partially_above_board_is_valid() {
    let mut board = Board::new();
    board.fill_row_except(1, &[], PieceKind::T);
    // Vertical I with only its lowest cell on row 0.
    assert!(fits(&board, PieceKind::I, Rotation::East, 0, -3));
    assert!(!fits(&board, PieceKind::I, Rotation::East, 0, -2));
}
