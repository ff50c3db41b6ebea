//! Stack discipline and subroutine linkage.
//!
//! The stack lives in main memory and grows downward from the seed address.
//! The stack pointer always addresses the most recently pushed byte:
//! - push: decrement, then write
//! - pop:  read, then increment
//!
//! Moving the pointer below `0x00` or above `0xFF` is an `OutOfRange` fault
//! (kind `Stack`) and leaves the pointer, memory and registers untouched.

use tracing::trace;

use super::Cpu;
use crate::common::constants::MEMORY_SIZE;
use crate::common::error::{RangeKind, Result, SimError};
use crate::soc::traits::Reporter;

impl<R: Reporter> Cpu<R> {
    /// Pushes `value` onto the stack.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the stack pointer is already `0x00`.
    pub fn push(&mut self, value: u8) -> Result<()> {
        let sp = self
            .sp
            .checked_sub(1)
            .ok_or_else(|| SimError::out_of_range(RangeKind::Stack, self.sp as usize))?;
        self.memory.write(sp as usize, value)?;
        self.sp = sp;
        Ok(())
    }

    /// Pops the byte at the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the stack pointer is already `0xFF`.
    pub fn pop(&mut self) -> Result<u8> {
        let sp = self
            .sp
            .checked_add(1)
            .ok_or_else(|| SimError::out_of_range(RangeKind::Stack, MEMORY_SIZE))?;
        let value = self.memory.read(self.sp as usize)?;
        self.sp = sp;
        Ok(value)
    }

    /// `CALL`: pushes the address of the next instruction and jumps to `target`.
    ///
    /// `len` is the length of the `CALL` instruction itself, so the saved
    /// return address is `PC + 2`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the return address would lie past memory or the
    /// push overflows the stack.
    pub(crate) fn call(&mut self, target: u8, len: u8) -> Result<()> {
        let ret = self.next_pc(len)?;
        self.push(ret)?;
        trace!(from = self.pc, to = target, ret, "call");
        self.pc = target;
        self.stats.branches_taken += 1;
        Ok(())
    }

    /// `RET`: pops the return address into the PC.
    ///
    /// An unmatched `RET` pops whatever byte the stack pointer addresses.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the stack pointer is already `0xFF`.
    pub(crate) fn ret(&mut self) -> Result<()> {
        let target = self.pop()?;
        trace!(from = self.pc, to = target, "ret");
        self.pc = target;
        self.stats.branches_taken += 1;
        Ok(())
    }
}
