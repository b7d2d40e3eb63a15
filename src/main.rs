//! Terminal Tetris runner (default binary).
//!
//! Puts the terminal in raw mode, runs the frame loop until the game is over
//! (or the player quits with `q` / Ctrl-C), restores the terminal and prints
//! the final score.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};

use tty_tetris::engine::{FrameStatus, GameConfig, GameLoop};
use tty_tetris::input::CrosstermInput;
use tty_tetris::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        let _ = term.exit();
        return Err(err.context("failed to enter raw terminal mode"));
    }

    let mut game = GameLoop::new(&config);
    let result = game.run(&mut CrosstermInput::new(), &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    let status = result?;

    match status {
        FrameStatus::Quit => println!("Quit."),
        _ => println!("Game over!"),
    }
    println!("Score: {}", game.state().score());
    Ok(())
}

/// Send tracing output to `TETRIS_LOG_PATH` when set; the terminal is busy with the game.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!(?config, "logging started");
    Ok(())
}
