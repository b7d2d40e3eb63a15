//! Terminal input module (engine-facing).
//!
//! The game loop only ever sees logical [`crate::types::GameAction`]s. This
//! crate hides everything platform-specific behind the [`InputShim`] trait:
//!
//! - [`CrosstermInput`] polls the real terminal without blocking
//! - [`ScriptedInput`] replays raw key bytes, decoding arrow keys with either
//!   the POSIX escape-sequence convention or the console scan-code convention
//!
//! [`map`] turns decoded key events into actions.

pub mod map;
pub mod scripted;
pub mod shim;

pub use tty_tetris_types as types;

pub use map::{action_for_key, should_quit};
pub use scripted::{KeyConvention, ScriptedInput};
pub use shim::{CrosstermInput, InputShim};
