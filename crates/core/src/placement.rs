//! Placement validator - can a piece sit at a given box offset?
//!
//! Pure query over the board. Every position change of the active piece is
//! gated by [`fits`] before it is committed.

use crate::board::Board;
use crate::rotation::occupied_cells;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `kind` at `rotation`, with its box's top-left at (x, y), fits on `board`.
///
/// An occupied cell fails the check when its column is outside `0..BOARD_WIDTH`,
/// its row is at or below `BOARD_HEIGHT`, or it lands on a filled board cell.
/// Cells above the board (row < 0) only have their column checked, which lets
/// a piece spawn with part of its box above row 0.
pub fn fits(board: &Board, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
    occupied_cells(kind, rotation).all(|(dx, dy)| {
        let bx = x + dx;
        let by = y + dy;

        if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
            return false;
        }

        by < 0 || !board.is_occupied(bx, by)
    })
}
