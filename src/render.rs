//! Rendering backend - buffered ANSI output with a headless sink for tests

use anyhow::Result;
use std::io::{self, BufWriter, Write};

/// Buffer capacity for write batching (16KB)
const WRITE_BUFFER_CAPACITY: usize = 16 * 1024;

enum Sink {
    Stdout(BufWriter<io::Stdout>),
    /// In-memory sink; lets component rendering be asserted without a terminal
    Memory(Vec<u8>),
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout(w) => w.write(buf),
            Sink::Memory(v) => v.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout(w) => w.flush(),
            Sink::Memory(_) => Ok(()),
        }
    }
}

/// Terminal renderer handling cursor movement and text output
///
/// Output is buffered; call `flush()` after a batch of operations.
pub struct Renderer {
    sink: Sink,
    in_alt_screen: bool,
}

impl Renderer {
    /// Create a renderer writing to stdout
    pub fn new() -> Self {
        Renderer {
            sink: Sink::Stdout(BufWriter::with_capacity(WRITE_BUFFER_CAPACITY, io::stdout())),
            in_alt_screen: false,
        }
    }

    /// Create a renderer capturing output in memory (for tests and snapshots)
    pub fn headless() -> Self {
        Renderer {
            sink: Sink::Memory(Vec::new()),
            in_alt_screen: false,
        }
    }

    /// Captured output of a headless renderer, lossily decoded
    pub fn captured_text(&self) -> Option<String> {
        match &self.sink {
            Sink::Memory(v) => Some(String::from_utf8_lossy(v).into_owned()),
            Sink::Stdout(_) => None,
        }
    }

    /// Enter alternative screen buffer
    pub fn enter_alt_screen(&mut self) -> Result<()> {
        if !self.in_alt_screen {
            write!(self.sink, "\x1b[?1049h")?;
            self.sink.flush()?;
            self.in_alt_screen = true;
        }
        Ok(())
    }

    /// Exit alternative screen buffer
    pub fn exit_alt_screen(&mut self) -> Result<()> {
        if self.in_alt_screen {
            write!(self.sink, "\x1b[?1049l")?;
            self.sink.flush()?;
            self.in_alt_screen = false;
        }
        Ok(())
    }

    /// Clear the screen
    pub fn clear(&mut self) -> Result<()> {
        write!(self.sink, "\x1b[2J")?;
        Ok(())
    }

    /// Move cursor to position (0-indexed)
    #[inline]
    pub fn move_cursor(&mut self, col: u16, row: u16) -> Result<()> {
        write!(self.sink, "\x1b[{};{}H", row + 1, col + 1)?;
        Ok(())
    }

    /// Hide cursor
    pub fn hide_cursor(&mut self) -> Result<()> {
        write!(self.sink, "\x1b[?25l")?;
        Ok(())
    }

    /// Show cursor
    pub fn show_cursor(&mut self) -> Result<()> {
        write!(self.sink, "\x1b[?25h")?;
        Ok(())
    }

    /// Write text at current cursor position
    #[inline]
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        write!(self.sink, "{}", text)?;
        Ok(())
    }

    /// Write text wrapped in an ANSI style fragment
    #[inline]
    pub fn write_styled(&mut self, text: &str, style: &str) -> Result<()> {
        write!(self.sink, "{}{}\x1b[0m", style, text)?;
        Ok(())
    }

    /// Write a repeated character
    #[inline]
    pub fn write_repeated(&mut self, ch: char, count: usize) -> Result<()> {
        for _ in 0..count {
            write!(self.sink, "{}", ch)?;
        }
        Ok(())
    }

    /// Flush output buffer to the terminal
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
