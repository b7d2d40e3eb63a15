//! Shape table - the seven pieces as 4x4 occupancy patterns
//!
//! Each pattern is 16 cells in row-major order (`x + y * 4`), `1` = occupied.
//! Only the spawn orientation is stored; other orientations are addressed
//! through [`crate::rotation::rotated_index`].

use crate::types::{PieceKind, PIECE_CELLS};

/// Occupancy pattern of a single piece in its spawn orientation
pub type Pattern = [u8; PIECE_CELLS];

/// Patterns indexed by [`PieceKind::index`]
pub const SHAPES: [Pattern; 7] = [
    [0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0], // I
    [0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0], // O
    [0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0], // S
    [0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0], // Z
    [0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0], // T
    [0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0], // L
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0], // J
];

/// Get the spawn-orientation pattern for a piece kind
#[inline]
pub fn pattern(kind: PieceKind) -> &'static Pattern {
    &SHAPES[kind.index()]
}
