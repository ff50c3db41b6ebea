//! Checked memory and register accessors.
//!
//! These are the only paths instruction handlers use to touch RAM and the
//! register file. Operand bytes arrive as raw `u8` values, so every index is
//! checked and an invalid one surfaces as `OutOfRange` instead of a panic.

use super::Cpu;
use crate::common::error::Result;
use crate::soc::traits::Reporter;

impl<R: Reporter> Cpu<R> {
    /// Reads the byte at `addr` (memory address register → memory data register).
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `addr` is not below 256.
    #[inline]
    pub fn ram_read(&self, addr: usize) -> Result<u8> {
        self.memory.read(addr)
    }

    /// Writes `val` at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `addr` is not below 256.
    #[inline]
    pub fn ram_write(&mut self, addr: usize, val: u8) -> Result<()> {
        self.memory.write(addr, val)
    }

    /// Reads register `idx`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `idx` is not in `0..8`.
    #[inline]
    pub fn get_register(&self, idx: usize) -> Result<u8> {
        self.regs.read(idx)
    }

    /// Writes register `idx`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `idx` is not in `0..8`.
    #[inline]
    pub fn set_register(&mut self, idx: usize, val: u8) -> Result<()> {
        self.regs.write(idx, val)
    }
}
