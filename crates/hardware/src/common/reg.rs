//! LS-8 Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight general-purpose
//! registers. It provides:
//! 1. **Storage:** Eight 8-bit registers `R0`-`R7`.
//! 2. **Reset State:** All registers zero except `R7`, which holds the stack seed.
//! 3. **Checked Access:** Indices outside `0`-`7` return an error instead of panicking.

use std::fmt;

use super::constants::{REGISTER_COUNT, SP_REGISTER, STACK_SEED};
use super::error::{RangeKind, Result, SimError};

/// The general-purpose register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a register file in its reset state.
    pub fn new() -> Self {
        Self::with_stack_seed(STACK_SEED)
    }

    /// Creates a register file whose `R7` holds `seed`.
    pub fn with_stack_seed(seed: u8) -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP_REGISTER] = seed;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRange`] if `idx` is not in `0..8`.
    #[inline]
    pub fn read(&self, idx: usize) -> Result<u8> {
        self.regs
            .get(idx)
            .copied()
            .ok_or_else(|| SimError::out_of_range(RangeKind::Register, idx))
    }

    /// Checks that `idx` names a register without touching it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRange`] if `idx` is not in `0..8`.
    #[inline]
    pub fn check(&self, idx: usize) -> Result<()> {
        if idx < self.regs.len() {
            Ok(())
        } else {
            Err(SimError::out_of_range(RangeKind::Register, idx))
        }
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRange`] if `idx` is not in `0..8`.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u8) -> Result<()> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or_else(|| SimError::out_of_range(RangeKind::Register, idx))?;
        *slot = val;
        Ok(())
    }

    /// Returns a copy of all eight registers.
    pub fn snapshot(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }

    /// Dumps the register file to stderr.
    pub fn dump(&self) {
        eprintln!("{self}");
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.regs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "R{i}={val:02X}")?;
        }
        Ok(())
    }
}
