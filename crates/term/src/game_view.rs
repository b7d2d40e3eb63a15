//! GameView: maps `core::GameState` into a plain-text frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write;

use crate::core::{ActivePiece, Board, GameState, PieceSource};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Longest score line: "Score: " plus a full `u32`
const SCORE_LINE_MAX: usize = "Score: ".len() + 10 + 1;

/// Text renderer for the playfield.
///
/// Each board row becomes `border` + one glyph per column + `border` + `\n`,
/// followed by a blank line and the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    filled: char,
    empty: char,
    border: char,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            filled: '#',
            empty: ' ',
            border: '|',
        }
    }
}

impl GameView {
    pub fn new(filled: char, empty: char, border: char) -> Self {
        Self {
            filled,
            empty,
            border,
        }
    }

    /// Upper bound in bytes of any frame this view produces
    pub fn frame_capacity(&self) -> usize {
        let glyph = self.filled.len_utf8().max(self.empty.len_utf8());
        let row = 2 * self.border.len_utf8() + (BOARD_WIDTH as usize) * glyph + 1;
        (BOARD_HEIGHT as usize) * row + 1 + SCORE_LINE_MAX
    }

    /// Render the current game state into `out`, replacing its contents.
    ///
    /// `out` can be reused across frames; after the first frame no further
    /// allocation happens.
    pub fn render_into<S: PieceSource>(&self, state: &GameState<S>, out: &mut String) {
        self.render_parts_into(state.board(), state.active().as_ref(), state.score(), out);
    }

    /// Render from the individual pieces of state.
    pub fn render_parts_into(
        &self,
        board: &Board,
        active: Option<&ActivePiece>,
        score: u32,
        out: &mut String,
    ) {
        out.clear();
        out.reserve(self.frame_capacity());

        for y in 0..BOARD_HEIGHT as i8 {
            out.push(self.border);
            for x in 0..BOARD_WIDTH as i8 {
                let covered = active.is_some_and(|piece| piece.covers(x, y));
                if covered || board.is_occupied(x, y) {
                    out.push(self.filled);
                } else {
                    out.push(self.empty);
                }
            }
            out.push(self.border);
            out.push('\n');
        }

        out.push('\n');
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Score: {}", score);
    }

    /// Convenience helper that allocates a new frame.
    pub fn render<S: PieceSource>(&self, state: &GameState<S>) -> String {
        let mut out = String::with_capacity(self.frame_capacity());
        self.render_into(state, &mut out);
        out
    }
}
