//! Console reporters.
//!
//! Two [`Reporter`] implementations: [`WriterReporter`] streams output to any
//! `io::Write` (stdout in the CLI), and [`CaptureReporter`] records it in memory
//! for embedding hosts and tests.

use std::io::{self, Write};

use crate::common::error::{Result, SimError};
use crate::soc::traits::Reporter;

/// One value printed by the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputEvent {
    /// Printed by `PRN`.
    Number(u8),
    /// Printed by `PRA`.
    Character(u8),
}

/// Streams program output to a writer.
#[derive(Debug)]
pub struct WriterReporter<W: Write> {
    out: W,
}

impl<W: Write> WriterReporter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriterReporter<io::Stdout> {
    /// A reporter writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for WriterReporter<W> {
    fn number(&mut self, value: u8) -> Result<()> {
        writeln!(self.out, "{value}").map_err(|e| SimError::Output(e.to_string()))
    }

    fn character(&mut self, value: u8) -> Result<()> {
        write!(self.out, "{}", char::from(value))
            .and_then(|()| self.out.flush())
            .map_err(|e| SimError::Output(e.to_string()))
    }
}

/// Records program output in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureReporter {
    events: Vec<OutputEvent>,
    text: String,
}

impl CaptureReporter {
    /// Creates an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every printed value in order.
    pub fn events(&self) -> &[OutputEvent] {
        &self.events
    }

    /// The output exactly as a terminal would have shown it.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The output split into lines.
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// Values printed by `PRN`, in order.
    pub fn numbers(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                OutputEvent::Number(n) => Some(*n),
                OutputEvent::Character(_) => None,
            })
            .collect()
    }
}

impl Reporter for CaptureReporter {
    fn number(&mut self, value: u8) -> Result<()> {
        self.events.push(OutputEvent::Number(value));
        self.text.push_str(&value.to_string());
        self.text.push('\n');
        Ok(())
    }

    fn character(&mut self, value: u8) -> Result<()> {
        self.events.push(OutputEvent::Character(value));
        self.text.push(char::from(value));
        Ok(())
    }
}
