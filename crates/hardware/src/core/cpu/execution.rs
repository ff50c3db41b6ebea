//! Instruction Execution.
//!
//! This module implements the fetch/decode/execute cycle. It performs:
//! 1. **Fetch/Decode:** Reads the opcode and both operand bytes at the PC.
//! 2. **Dispatch:** Matches the closed `Opcode` set to its handler.
//! 3. **PC Advance:** Adds the instruction length unless the opcode sets the PC itself.
//! 4. **Observability:** Per-instruction tracing and statistics.
//!
//! The "sets PC" bit is read from the opcode before dispatch and decides the
//! advance afterwards, whatever the handler did. Control-flow instructions are
//! therefore never advanced twice.

use tracing::{debug, trace, warn};

use super::Cpu;
use crate::common::error::Result;
use crate::core::arch::{Flag, RunState};
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::disasm::disassemble;
use crate::isa::{Decoded, InstructionBits, Opcode, decode};
use crate::soc::traits::Reporter;

/// What a single [`Cpu::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction executed and the CPU is still running.
    Executed(Decoded),
    /// The CPU is halted (either this step ran `HLT` or it already was).
    Halted,
}

impl<R: Reporter> Cpu<R> {
    /// Runs until `HLT`.
    ///
    /// # Errors
    ///
    /// Returns the first fatal fault. The CPU state is left as it was at the
    /// fault for inspection with [`Cpu::dump_state`].
    pub fn run(&mut self) -> Result<()> {
        while let StepOutcome::Executed(_) = self.step()? {}
        Ok(())
    }

    /// Performs one fetch/decode/execute cycle.
    ///
    /// A halted CPU does nothing and reports [`StepOutcome::Halted`].
    ///
    /// # Errors
    ///
    /// Returns `IllegalOpcode`, `OutOfRange`, `UnsupportedAluOp` or `Output`.
    /// Division by zero is recovered inside the step and is never returned.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.state == RunState::Halted {
            return Ok(StepOutcome::Halted);
        }

        let inst = decode(&self.memory, self.pc)?;
        if self.trace || cfg!(feature = "always-trace") {
            self.trace_instruction(&inst);
        }

        let sets_pc = inst.sets_pc();
        self.execute(&inst)?;
        self.stats.retire(inst.opcode.class());

        if self.state == RunState::Halted {
            debug!(pc = self.pc, retired = self.stats.instructions_retired, "halted");
            return Ok(StepOutcome::Halted);
        }
        if !sets_pc {
            self.advance(inst.len())?;
        }
        Ok(StepOutcome::Executed(inst))
    }

    /// Dispatches one decoded instruction to its handler.
    fn execute(&mut self, inst: &Decoded) -> Result<()> {
        let a = inst.operand_a;
        let b = inst.operand_b;
        let len = inst.len();

        match inst.opcode {
            Opcode::Nop => {}
            Opcode::Hlt => self.state = RunState::Halted,

            Opcode::Ldi => self.set_register(a as usize, b)?,
            Opcode::Ld => {
                let addr = self.get_register(b as usize)?;
                let val = self.ram_read(addr as usize)?;
                self.set_register(a as usize, val)?;
            }
            Opcode::St => {
                let addr = self.get_register(a as usize)?;
                let val = self.get_register(b as usize)?;
                self.ram_write(addr as usize, val)?;
            }

            Opcode::Prn => {
                let val = self.get_register(a as usize)?;
                self.reporter.number(val)?;
            }
            Opcode::Pra => {
                let val = self.get_register(a as usize)?;
                self.reporter.character(val)?;
            }

            Opcode::Push => {
                let val = self.get_register(a as usize)?;
                self.push(val)?;
            }
            Opcode::Pop => {
                // Validate the destination first so a bad index leaves SP alone.
                self.regs.check(a as usize)?;
                let val = self.pop()?;
                self.set_register(a as usize, val)?;
            }
            Opcode::Call => {
                let target = self.get_register(a as usize)?;
                self.call(target, len)?;
            }
            Opcode::Ret => self.ret()?,

            Opcode::Jmp => {
                let target = self.get_register(a as usize)?;
                self.jump(target);
            }
            Opcode::Jeq => self.conditional_jump(self.flag.is_equal(), a, len)?,
            Opcode::Jne => self.conditional_jump(!self.flag.is_equal(), a, len)?,
            Opcode::Jgt => self.conditional_jump(self.flag == Flag::Greater, a, len)?,
            Opcode::Jlt => self.conditional_jump(self.flag == Flag::Less, a, len)?,
            Opcode::Jle => self.conditional_jump(self.flag.is_less_or_equal(), a, len)?,
            Opcode::Jge => self.conditional_jump(self.flag.is_greater_or_equal(), a, len)?,

            Opcode::Cmp => {
                let x = self.get_register(a as usize)?;
                let y = self.get_register(b as usize)?;
                self.flag = Alu::compare(x, y);
            }
            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Mod
            | Opcode::Inc
            | Opcode::Dec
            | Opcode::And
            | Opcode::Not
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Shl
            | Opcode::Shr => self.alu(inst)?,
        }
        Ok(())
    }

    /// Runs an ALU instruction and writes the result back to `regA`.
    ///
    /// `regB` is only read for two-operand opcodes; for `INC`/`DEC`/`NOT` the
    /// second operand byte belongs to the next instruction.
    fn alu(&mut self, inst: &Decoded) -> Result<()> {
        let op = AluOp::try_from(inst.opcode)?;
        let dst = inst.operand_a as usize;
        let x = self.get_register(dst)?;
        let y = if inst.raw().operand_count() == 2 {
            self.get_register(inst.operand_b as usize)?
        } else {
            0
        };

        match Alu::execute(op, x, y) {
            Ok(val) => self.set_register(dst, val),
            Err(e) if !e.is_fatal() => {
                warn!(pc = inst.pc, "{}: {e}, R{} left unchanged", inst.opcode, dst);
                self.stats.recovered_faults += 1;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Reads the target register and branches if `taken`.
    fn conditional_jump(&mut self, taken: bool, reg: u8, len: u8) -> Result<()> {
        let target = self.get_register(reg as usize)?;
        self.branch_if(taken, target, len)
    }

    /// Emits one trace line: address, raw bytes, disassembly, registers, SP and flag.
    fn trace_instruction(&self, inst: &Decoded) {
        trace!(
            "{:02X} | {:02X} {:02X} {:02X} | {:<12} | {} SP={:02X} FL={}",
            inst.pc,
            inst.raw(),
            inst.operand_a,
            inst.operand_b,
            disassemble(inst.raw(), inst.operand_a, inst.operand_b),
            self.regs,
            self.sp,
            self.flag
        );
    }
}
