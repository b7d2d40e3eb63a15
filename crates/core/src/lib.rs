//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the gameplay rules: piece shapes, rotation, placement
//! checks, the board and the complete game state. It has **zero dependencies**
//! on the terminal or any other I/O, which keeps it:
//!
//! - **Deterministic**: same seed (or piece source) produces identical games
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: the same state drives any renderer or input shim
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven 4x4 occupancy patterns
//! - [`rotation`]: index arithmetic addressing a pattern under 4 orientations
//! - [`placement`]: bounds and overlap checks for a piece at an offset
//! - [`board`]: 10x20 grid of settled cells with line clearing
//! - [`game_state`]: active piece, scoring, spawning and gravity steps
//! - [`rng`]: piece sources (seeded uniform RNG, fixed piece)
//!
//! # Example
//!
//! ```
//! use tty_tetris_core::{GameState, GravityOutcome};
//! use tty_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // Let gravity bring the piece down until it locks.
//! while game.gravity_step() == GravityOutcome::Moved {}
//! assert!(game.board().cells().iter().any(|c| c.is_some()));
//! ```

pub mod board;
pub mod game_state;
pub mod placement;
pub mod rng;
pub mod rotation;
pub mod shapes;

pub use tty_tetris_types as types;

pub use board::Board;
pub use game_state::{ActivePiece, GameState, GravityOutcome, Phase};
pub use placement::fits;
pub use rng::{FixedPiece, PieceSource, SimpleRng};
pub use rotation::{is_filled, occupied_cells, rotated_index};
pub use shapes::{pattern, Pattern, SHAPES};
