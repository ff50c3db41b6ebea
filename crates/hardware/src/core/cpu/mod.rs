//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Registers, stack pointer, program counter, flag and run state.
//! 2. **Memory:** The 256-byte RAM and the program loader entry point.
//! 3. **Output:** The `Reporter` receiving `PRN`/`PRA` output.
//! 4. **Observability:** Instruction tracing, statistics and state dumps.

/// Jumps and conditional branches.
pub mod control;

/// Fetch/decode/execute loop and instruction dispatch.
pub mod execution;

/// Checked memory and register accessors.
pub mod memory;

/// Push/pop and subroutine linkage.
pub mod stack;

use tracing::debug;

use crate::common::constants::PROGRAM_BASE;
use crate::common::error::Result;
use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::arch::{Flag, RunState};
use crate::soc::memory::Memory;
use crate::soc::traits::Reporter;
use crate::stats::SimStats;

pub use execution::StepOutcome;

/// Main CPU structure containing all processor state.
///
/// Generic over the output sink so hosts can inspect what the program printed
/// (see [`CaptureReporter`](crate::soc::CaptureReporter)).
#[derive(Debug)]
pub struct Cpu<R: Reporter> {
    /// General-purpose registers `R0`-`R7`.
    pub regs: RegisterFile,
    /// Main memory.
    pub memory: Memory,
    /// Program counter.
    pub pc: u8,
    /// Stack pointer; address of the most recently pushed byte.
    pub sp: u8,
    /// Result of the last `CMP`.
    pub flag: Flag,
    /// Running or halted.
    pub state: RunState,
    /// Output sink for `PRN`/`PRA`.
    pub reporter: R,
    /// Execution statistics.
    pub stats: SimStats,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Reset value of `R7` and the stack pointer.
    stack_seed: u8,
}

impl<R: Reporter> Cpu<R> {
    /// Creates a CPU in its reset state with the default configuration.
    pub fn new(reporter: R) -> Self {
        Self::with_config(reporter, &Config::default())
    }

    /// Creates a CPU in its reset state.
    ///
    /// `R7` and the stack pointer both start at `config.system.stack_seed`.
    pub fn with_config(reporter: R, config: &Config) -> Self {
        let regs = RegisterFile::with_stack_seed(config.system.stack_seed);
        let sp = config.system.stack_seed;
        Self {
            regs,
            memory: Memory::new(),
            pc: 0,
            sp,
            flag: Flag::Unset,
            state: RunState::Running,
            reporter,
            stats: SimStats::new(),
            trace: config.general.trace_instructions,
            stack_seed: sp,
        }
    }

    /// Writes a program image into memory starting at address 0.
    ///
    /// Bytes past the end of the image keep their previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ProgramTooLarge`](crate::common::SimError::ProgramTooLarge)
    /// for images over 256 bytes; memory is left unchanged.
    pub fn load(&mut self, program: &[u8]) -> Result<()> {
        self.memory.load(program, PROGRAM_BASE)?;
        debug!(bytes = program.len(), "program loaded");
        Ok(())
    }

    /// Restores registers, stack pointer, PC, flag and run state to reset values.
    ///
    /// Memory, output and statistics are kept.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::with_stack_seed(self.stack_seed);
        self.sp = self.stack_seed;
        self.pc = 0;
        self.flag = Flag::Unset;
        self.state = RunState::Running;
    }

    /// Returns `true` once `HLT` has executed.
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Dumps PC, SP, flag and registers to stderr.
    pub fn dump_state(&self) {
        eprintln!(
            "PC = {:#04x}  SP = {:#04x}  FL = {}  ({:?})",
            self.pc, self.sp, self.flag, self.state
        );
        self.regs.dump();
    }
}
