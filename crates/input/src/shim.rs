//! The input shim: a non-blocking "is a key waiting?" plus a key read.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Source of raw key events for the game loop.
///
/// `has_input` must never block. `read_key` may block, but is only called
/// after `has_input` returned true.
pub trait InputShim {
    fn has_input(&mut self) -> Result<bool>;

    /// Read the next event; `None` when it was not a key press (resize, release, ...).
    fn read_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Reads keys from the controlling terminal through crossterm.
///
/// Escape-sequence decoding for arrow keys is done by crossterm for the
/// platform it runs on. The terminal must already be in raw mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputShim for CrosstermInput {
    fn has_input(&mut self) -> Result<bool> {
        Ok(event::poll(Duration::ZERO)?)
    }

    fn read_key(&mut self) -> Result<Option<KeyEvent>> {
        match event::read()? {
            // Auto-repeat counts as a fresh press: holding an arrow keeps moving.
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}
