//! Byte-level key decoding and a replayable input shim.
//!
//! Terminals report arrow keys differently per platform:
//!
//! - POSIX terminals send the escape sequences `ESC [ A` (up), `ESC [ B` (down),
//!   `ESC [ C` (right) and `ESC [ D` (left).
//! - The Windows console reports a prefix byte (`0x00` or `0xE0`) followed by a
//!   scan code: 72 (up), 80 (down), 77 (right), 75 (left).
//!
//! Everything else is a single byte. Decoding always produces crossterm
//! [`KeyEvent`]s so the same key map applies to live and replayed input.

use std::collections::VecDeque;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::shim::InputShim;

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;

/// How multi-byte keys are encoded in the byte stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyConvention {
    Posix,
    Console,
}

impl KeyConvention {
    /// Convention of the platform this binary was built for
    pub fn native() -> Self {
        if cfg!(windows) {
            KeyConvention::Console
        } else {
            KeyConvention::Posix
        }
    }

    /// Decode one key from the front of `bytes`, consuming what it used.
    ///
    /// Returns `None` only when `bytes` is empty. Unknown sequences decode to
    /// [`KeyCode::Null`].
    pub fn decode(&self, bytes: &mut VecDeque<u8>) -> Option<KeyEvent> {
        let first = bytes.pop_front()?;
        let key = match (*self, first) {
            (_, CTRL_C) => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            (KeyConvention::Posix, ESC) => {
                if bytes.front() != Some(&b'[') {
                    return Some(KeyEvent::from(KeyCode::Esc));
                }
                bytes.pop_front();
                let code = match bytes.pop_front() {
                    Some(b'A') => KeyCode::Up,
                    Some(b'B') => KeyCode::Down,
                    Some(b'C') => KeyCode::Right,
                    Some(b'D') => KeyCode::Left,
                    _ => KeyCode::Null,
                };
                KeyEvent::from(code)
            }
            (KeyConvention::Console, 0x00 | 0xe0) => {
                let code = match bytes.pop_front() {
                    Some(72) => KeyCode::Up,
                    Some(80) => KeyCode::Down,
                    Some(77) => KeyCode::Right,
                    Some(75) => KeyCode::Left,
                    _ => KeyCode::Null,
                };
                KeyEvent::from(code)
            }
            (KeyConvention::Console, ESC) => KeyEvent::from(KeyCode::Esc),
            (_, b'\r' | b'\n') => KeyEvent::from(KeyCode::Enter),
            (_, byte) if byte.is_ascii() && !byte.is_ascii_control() => {
                KeyEvent::from(KeyCode::Char(byte as char))
            }
            _ => KeyEvent::from(KeyCode::Null),
        };
        Some(key)
    }
}

/// Input shim that replays a fixed byte stream.
///
/// Every byte is "available" immediately, so one frame drains the whole
/// script unless bytes are fed between frames with [`ScriptedInput::push`].
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    convention: KeyConvention,
    bytes: VecDeque<u8>,
}

impl ScriptedInput {
    pub fn new(convention: KeyConvention) -> Self {
        Self {
            convention,
            bytes: VecDeque::new(),
        }
    }

    pub fn from_bytes(convention: KeyConvention, bytes: &[u8]) -> Self {
        let mut input = Self::new(convention);
        input.push(bytes);
        input
    }

    /// Queue more raw bytes
    pub fn push(&mut self, bytes: &[u8]) {
        self.bytes.extend(bytes.iter().copied());
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl InputShim for ScriptedInput {
    fn has_input(&mut self) -> Result<bool> {
        Ok(!self.bytes.is_empty())
    }

    fn read_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.convention.decode(&mut self.bytes))
    }
}
