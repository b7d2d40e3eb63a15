//! TTY Tetris (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, integration
//! tests and benches can use `tty_tetris::{core,engine,input,term,types}`.

pub use tty_tetris_core as core;
pub use tty_tetris_engine as engine;
pub use tty_tetris_input as input;
pub use tty_tetris_term as term;
pub use tty_tetris_types as types;
