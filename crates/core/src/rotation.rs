//! Rotation mapper - addresses a piece pattern under any of the 4 orientations
//!
//! No rotated copies are stored. A local cell `(x, y)` inside the 4x4 box is
//! mapped straight to the pattern index it shows after `rotation` quarter
//! turns, so validation, locking and rendering share one addressing function.

use crate::shapes::pattern;
use crate::types::{PieceKind, Rotation, PIECE_BOX};

const W: i32 = PIECE_BOX as i32;

/// Pattern index of local cell `(x, y)` under `rotation`.
///
/// Both coordinates must be in `0..4`.
#[inline(always)]
pub fn rotated_index(x: u8, y: u8, rotation: Rotation) -> usize {
    let (x, y) = (x as i32, y as i32);
    let idx = match rotation {
        Rotation::North => x + y * W,
        Rotation::East => (W - 1) * W + y - x * W,
        Rotation::South => W * W - 1 - y * W - x,
        Rotation::West => (W - 1) - y + x * W,
    };
    idx as usize
}

/// Whether local cell `(x, y)` of the rotated piece is occupied
#[inline]
pub fn is_filled(kind: PieceKind, rotation: Rotation, x: u8, y: u8) -> bool {
    pattern(kind)[rotated_index(x, y, rotation)] == 1
}

/// Local `(x, y)` coordinates of every occupied cell, row by row
pub fn occupied_cells(kind: PieceKind, rotation: Rotation) -> impl Iterator<Item = (i8, i8)> {
    (0..PIECE_BOX).flat_map(move |y| {
        (0..PIECE_BOX)
            .filter(move |&x| is_filled(kind, rotation, x, y))
            .map(move |x| (x as i8, y as i8))
    })
}
