//! Output sink trait.
//!
//! `PRN` and `PRA` are the only instructions with an externally visible effect.
//! The engine hands their values to a [`Reporter`], which decides where the text
//! goes (a terminal, a buffer, a test double).

use crate::common::error::Result;

/// Receives the values printed by a running program.
pub trait Reporter {
    /// Emits `value` as a decimal number followed by a newline (`PRN`).
    fn number(&mut self, value: u8) -> Result<()>;

    /// Emits `value` as a single ASCII character with no newline (`PRA`).
    fn character(&mut self, value: u8) -> Result<()>;
}
