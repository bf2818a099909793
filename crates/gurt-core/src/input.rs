//! Line sources for interactive prompts
//!
//! Prompts never read stdin directly; they pull lines from a [`LineSource`].
//! The terminal implementation lives in the binary, buffered readers and
//! scripted sessions live here.

use crate::error::{GurtError, Result};
use std::collections::VecDeque;
use std::io::BufRead;

/// Where interactive input comes from.
pub trait LineSource {
    /// Block until the next line is available.
    ///
    /// Returns `Ok(None)` at end of input, `Err(GurtError::Interrupted)` when
    /// the user interrupts. The line is returned without its terminator.
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// Lines from any buffered reader, e.g. a piped stdin.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and read as an unknown choice
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// A fixed script of lines, optionally ending in an interrupt.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    interrupt_at_end: bool,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            interrupt_at_end: false,
        }
    }

    /// Behave like Ctrl+C once the script runs out.
    pub fn then_interrupt(mut self) -> Self {
        self.interrupt_at_end = true;
        self
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.pop_front() {
            Some(line) => Ok(Some(line)),
            None if self.interrupt_at_end => Err(GurtError::Interrupted),
            None => Ok(None),
        }
    }
}
