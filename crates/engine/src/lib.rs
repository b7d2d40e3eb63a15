//! Game engine: configuration, gravity timing and the frame loop.
//!
//! This crate wires the pure core to the outside world. It owns no terminal
//! itself: input arrives through an [`input::InputShim`] and frames leave
//! through a [`term::FrameSink`], so a whole game can be replayed in tests.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use tty_tetris_engine::{FrameStatus, GameConfig, GameLoop};
//! use tty_tetris_engine::input::{KeyConvention, ScriptedInput};
//!
//! let config = GameConfig { seed: Some(7), ..GameConfig::default() };
//! let mut game = GameLoop::new(&config);
//! let mut input = ScriptedInput::from_bytes(KeyConvention::Posix, b"\x1b[D ");
//! let mut frames: Vec<String> = Vec::new();
//!
//! let status = game.frame(&mut input, &mut frames, Duration::from_millis(10)).unwrap();
//! assert_eq!(status, FrameStatus::Running);
//! assert!(frames[0].ends_with("Score: 0\n"));
//! ```

pub mod config;
pub mod game_loop;
pub mod timer;

pub use tty_tetris_core as core;
pub use tty_tetris_input as input;
pub use tty_tetris_term as term;
pub use tty_tetris_types as types;

pub use config::GameConfig;
pub use game_loop::{FrameStatus, GameLoop};
pub use timer::GravityTimer;
