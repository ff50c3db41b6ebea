//! Program counter control: sequential advance, jumps and conditional branches.

use super::Cpu;
use crate::common::error::{RangeKind, Result, SimError};
use crate::soc::traits::Reporter;

impl<R: Reporter> Cpu<R> {
    /// Address of the instruction following one of `len` bytes at the PC.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` (kind `ProgramCounter`) past address `0xFF`.
    pub(crate) fn next_pc(&self, len: u8) -> Result<u8> {
        let next = self.pc as usize + len as usize;
        u8::try_from(next).map_err(|_| SimError::out_of_range(RangeKind::ProgramCounter, next))
    }

    /// Moves the PC past an instruction of `len` bytes.
    pub(crate) fn advance(&mut self, len: u8) -> Result<()> {
        self.pc = self.next_pc(len)?;
        Ok(())
    }

    /// Unconditional jump to `target`.
    pub(crate) fn jump(&mut self, target: u8) {
        self.pc = target;
        self.stats.branches_taken += 1;
    }

    /// Jumps to `target` if `taken`, otherwise falls through.
    ///
    /// Branches own the PC, so the not-taken path advances it here; the engine
    /// never auto-advances a PC-setting opcode.
    pub(crate) fn branch_if(&mut self, taken: bool, target: u8, len: u8) -> Result<()> {
        if taken {
            self.jump(target);
            Ok(())
        } else {
            self.advance(len)
        }
    }
}
