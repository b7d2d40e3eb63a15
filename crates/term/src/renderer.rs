//! TerminalRenderer: owns terminal mode and writes text frames to it.
//!
//! Raw mode disables output post-processing, so every frame line is
//! terminated with an explicit `\r\n`.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

/// Destination for rendered frames.
pub trait FrameSink {
    fn present(&mut self, frame: &str) -> Result<()>;
}

/// Keeps every presented frame; used for replays and tests.
impl FrameSink for Vec<String> {
    fn present(&mut self, frame: &str) -> Result<()> {
        self.push(frame.to_owned());
        Ok(())
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Switch to raw, unechoed input, hide the cursor and start from a clear screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::Clear(ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()?;
        Ok(())
    }

    /// Clear the screen, show the cursor and restore cooked mode.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for TerminalRenderer {
    fn present(&mut self, frame: &str) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Encode a frame redraw from the home position into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(frame: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    for line in frame.lines() {
        out.queue(Print(line))?;
        out.queue(terminal::Clear(ClearType::UntilNewLine))?;
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_lines_get_carriage_returns() {
        let mut out = Vec::new();
        encode_frame_into("|# |\n|  |\n\nScore: 0\n", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("|# |"));
        assert!(text.contains("Score: 0"));
        assert_eq!(text.matches("\r\n").count(), 4);
        assert_eq!(text.matches('\n').count(), 4);
    }

    #[test]
    fn vec_sink_records_frames() {
        let mut sink: Vec<String> = Vec::new();
        sink.present("a\n").unwrap();
        sink.present("b\n").unwrap();
        assert_eq!(sink, vec!["a\n".to_string(), "b\n".to_string()]);
    }
}
