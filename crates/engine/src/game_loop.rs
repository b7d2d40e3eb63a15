//! The frame loop: input, gravity and rendering for one game.
//!
//! Every frame runs the same procedure:
//!
//! 1. drain every pending key without blocking, applying each mapped action
//!    through the placement validator (rejected moves are dropped)
//! 2. feed the measured frame time to the gravity timer and perform at most
//!    one gravity step
//! 3. render and present a frame, whether or not anything changed
//!
//! [`GameLoop::run`] repeats this with a short sleep between frames until the
//! game is over or the player quits.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::core::{GameState, GravityOutcome, PieceSource, SimpleRng};
use crate::input::{action_for_key, should_quit, InputShim};
use crate::term::{FrameSink, GameView};
use crate::timer::GravityTimer;

/// What the loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Running,
    /// A new piece could not spawn; the frame just presented was the last one
    GameOver,
    /// The player asked to leave
    Quit,
}

pub struct GameLoop<S = SimpleRng> {
    state: GameState<S>,
    gravity: GravityTimer,
    view: GameView,
    frame_delay: Duration,
    frame: String,
    frames: u64,
    quit: bool,
}

impl GameLoop<SimpleRng> {
    /// Start a randomly seeded game with the given configuration
    pub fn new(config: &GameConfig) -> Self {
        let seed = config.seed_or_clock();
        info!(seed, "new game");
        let state = GameState::new(seed).with_line_clear_score(config.line_clear_score);
        Self::with_state(state, config)
    }
}

impl<S: PieceSource> GameLoop<S> {
    /// Drive an existing game state; it is started if it was not already.
    pub fn with_state(mut state: GameState<S>, config: &GameConfig) -> Self {
        state.start();
        let view = GameView::default();
        Self {
            state,
            gravity: GravityTimer::new(config.gravity_interval),
            view,
            frame_delay: config.frame_delay,
            frame: String::with_capacity(view.frame_capacity()),
            frames: 0,
            quit: false,
        }
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    pub fn into_state(self) -> GameState<S> {
        self.state
    }

    /// The most recently rendered frame
    pub fn last_frame(&self) -> &str {
        &self.frame
    }

    /// Number of frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn status(&self) -> FrameStatus {
        if self.state.game_over() {
            FrameStatus::GameOver
        } else if self.quit {
            FrameStatus::Quit
        } else {
            FrameStatus::Running
        }
    }

    /// Run one frame with `elapsed` time since the previous one.
    pub fn frame(
        &mut self,
        input: &mut impl InputShim,
        sink: &mut impl FrameSink,
        elapsed: Duration,
    ) -> Result<FrameStatus> {
        self.drain_input(input)?;

        if self.status() == FrameStatus::Running && self.gravity.advance(elapsed) {
            self.step_gravity();
        }

        self.view.render_into(&self.state, &mut self.frame);
        sink.present(&self.frame)?;
        self.frames += 1;

        Ok(self.status())
    }

    /// Run frames until the game ends or the player quits.
    pub fn run(
        &mut self,
        input: &mut impl InputShim,
        sink: &mut impl FrameSink,
    ) -> Result<FrameStatus> {
        let mut last = Instant::now();
        loop {
            let now = Instant::now();
            let status = self.frame(input, sink, now.duration_since(last))?;
            last = now;

            if status != FrameStatus::Running {
                info!(
                    ?status,
                    score = self.state.score(),
                    lines = self.state.lines(),
                    pieces = self.state.pieces(),
                    frames = self.frames,
                    "session finished"
                );
                return Ok(status);
            }

            thread::sleep(self.frame_delay);
        }
    }

    fn drain_input(&mut self, input: &mut impl InputShim) -> Result<()> {
        while input.has_input()? {
            let Some(key) = input.read_key()? else {
                continue;
            };

            if should_quit(key) {
                debug!("quit requested");
                self.quit = true;
                return Ok(());
            }

            if let Some(action) = action_for_key(key) {
                let applied = self.state.apply_action(action);
                trace!(action = action.as_str(), applied, "input");
            }
        }
        Ok(())
    }

    fn step_gravity(&mut self) {
        if let GravityOutcome::Locked { lines_cleared } = self.state.gravity_step() {
            debug!(
                lines_cleared,
                score = self.state.score(),
                pieces = self.state.pieces(),
                "piece locked"
            );
            if self.state.game_over() {
                info!(score = self.state.score(), "game over: spawn blocked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, FixedPiece};
    use crate::input::{KeyConvention, ScriptedInput};
    use crate::types::PieceKind;

    fn fixed_loop(kind: PieceKind) -> GameLoop<FixedPiece> {
        GameLoop::with_state(
            GameState::with_source(FixedPiece(kind)),
            &GameConfig::default(),
        )
    }

    fn idle() -> ScriptedInput {
        ScriptedInput::new(KeyConvention::Posix)
    }

    #[test]
    fn renders_every_frame() {
        let mut game = fixed_loop(PieceKind::T);
        let mut frames: Vec<String> = Vec::new();

        for _ in 0..3 {
            let status = game
                .frame(&mut idle(), &mut frames, Duration::from_millis(1))
                .unwrap();
            assert_eq!(status, FrameStatus::Running);
        }

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], frames[2]);
        assert_eq!(game.frames(), 3);
        assert_eq!(game.last_frame(), frames[2]);
    }

    #[test]
    fn input_is_drained_in_one_frame() {
        let mut game = fixed_loop(PieceKind::O);
        let mut input = ScriptedInput::from_bytes(KeyConvention::Posix, b"\x1b[D\x1b[D\x1b[B");
        let mut frames: Vec<String> = Vec::new();

        game.frame(&mut input, &mut frames, Duration::ZERO).unwrap();

        assert_eq!(input.remaining(), 0);
        let active = game.state().active().unwrap();
        assert_eq!((active.x, active.y), (1, 1));
    }

    #[test]
    fn rejected_moves_are_dropped() {
        let mut game = fixed_loop(PieceKind::O);
        // O spans box columns 1-2; from x = 3 only four left moves fit.
        let mut input = ScriptedInput::from_bytes(KeyConvention::Posix, &b"a".repeat(10));
        let mut frames: Vec<String> = Vec::new();

        game.frame(&mut input, &mut frames, Duration::ZERO).unwrap();

        assert_eq!(game.state().active().unwrap().x, -1);
    }

    #[test]
    fn one_gravity_step_per_frame() {
        let mut game = fixed_loop(PieceKind::O);
        let mut frames: Vec<String> = Vec::new();

        game.frame(&mut idle(), &mut frames, Duration::from_secs(5))
            .unwrap();
        assert_eq!(game.state().active().unwrap().y, 1);

        game.frame(&mut idle(), &mut frames, Duration::from_millis(349))
            .unwrap();
        assert_eq!(game.state().active().unwrap().y, 1);

        game.frame(&mut idle(), &mut frames, Duration::from_millis(1))
            .unwrap();
        assert_eq!(game.state().active().unwrap().y, 2);
    }

    #[test]
    fn quit_key_stops_the_loop() {
        let mut game = fixed_loop(PieceKind::I);
        let mut input = ScriptedInput::from_bytes(KeyConvention::Console, &[0xe0, 75, 0x03, 0xe0, 75]);
        let mut frames: Vec<String> = Vec::new();

        let status = game.run(&mut input, &mut frames).unwrap();

        assert_eq!(status, FrameStatus::Quit);
        assert_eq!(frames.len(), 1);
        assert_eq!(game.state().active().unwrap().x, 2);
        assert_eq!(input.remaining(), 2);
    }

    #[test]
    fn blocked_start_renders_once_and_ends() {
        let mut board = Board::new();
        board.set(4, 1, Some(PieceKind::S));
        let state = GameState::with_source(FixedPiece(PieceKind::O)).with_board(board);
        let mut game = GameLoop::with_state(state, &GameConfig::default());
        let mut frames: Vec<String> = Vec::new();

        let status = game.run(&mut idle(), &mut frames).unwrap();

        assert_eq!(status, FrameStatus::GameOver);
        assert_eq!(frames.len(), 1);
    }
}
