//! Terminal rendering module.
//!
//! Rendering is split in two:
//!
//! - [`GameView`] turns a game state into a plain-text frame (pure, testable)
//! - [`TerminalRenderer`] owns terminal mode and writes frames to stdout
//!
//! The game loop only talks to the [`FrameSink`] trait, so frames can also be
//! captured in memory.

pub mod game_view;
pub mod renderer;

pub use tty_tetris_core as core;
pub use tty_tetris_types as types;

pub use game_view::GameView;
pub use renderer::{encode_frame_into, FrameSink, TerminalRenderer};
