//! Simulator: a CPU together with the run policy from its configuration.
//!
//! `Cpu::run` executes until `HLT` with no other bound. The simulator adds
//! the optional step limit so a host can stop a program that never halts.

use tracing::{debug, info};

use crate::common::error::Result;
use crate::config::Config;
use crate::core::{Cpu, StepOutcome};
use crate::sim::loader;
use crate::soc::traits::Reporter;

/// How a bounded run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program executed `HLT`.
    Halted {
        /// Instructions executed, `HLT` included.
        steps: u64,
    },
    /// The step limit was reached first.
    StepLimit {
        /// Instructions executed.
        steps: u64,
    },
}

/// Top-level simulator: CPU state plus run limits.
#[derive(Debug)]
pub struct Simulator<R: Reporter> {
    /// The emulated machine.
    pub cpu: Cpu<R>,
    max_steps: Option<u64>,
}

impl<R: Reporter> Simulator<R> {
    /// Creates a simulator with a fresh CPU.
    pub fn new(reporter: R, config: &Config) -> Self {
        Self {
            cpu: Cpu::with_config(reporter, config),
            max_steps: config.general.max_steps,
        }
    }

    /// Parses `source` and loads it into a fresh simulator.
    ///
    /// # Errors
    ///
    /// Returns `MalformedProgram` or `ProgramTooLarge`.
    pub fn from_source(source: &str, reporter: R, config: &Config) -> Result<Self> {
        let program = loader::parse_program(source)?;
        let mut sim = Self::new(reporter, config);
        sim.cpu.load(&program)?;
        Ok(sim)
    }

    /// Replaces the step limit.
    pub fn set_max_steps(&mut self, max_steps: Option<u64>) {
        self.max_steps = max_steps;
    }

    /// Advances the CPU by one instruction.
    ///
    /// # Errors
    ///
    /// Returns any fatal fault raised by the instruction.
    pub fn tick(&mut self) -> Result<StepOutcome> {
        self.cpu.step()
    }

    /// Runs until `HLT` or the step limit.
    ///
    /// # Errors
    ///
    /// Returns the first fatal fault.
    pub fn run(&mut self) -> Result<RunOutcome> {
        let mut steps = 0u64;
        loop {
            if self.max_steps.is_some_and(|max| steps >= max) {
                info!(steps, "step limit reached");
                return Ok(RunOutcome::StepLimit { steps });
            }
            // A CPU that was already halted executes nothing.
            if self.cpu.is_halted() {
                return Ok(RunOutcome::Halted { steps });
            }
            let outcome = self.tick()?;
            steps += 1;
            if outcome == StepOutcome::Halted {
                debug!(steps, "program halted");
                return Ok(RunOutcome::Halted { steps });
            }
        }
    }
}
