//! LS-8 processor core.
//!
//! This module contains the complete execution engine:
//! 1. **Arch:** The comparison flag and the run state.
//! 2. **CPU:** State ownership, fetch/decode/execute, stack and control flow.
//! 3. **Units:** The arithmetic logic unit.

/// Architectural state (flag, run state).
pub mod arch;

/// The CPU and its execution loop.
pub mod cpu;

/// Functional units (ALU).
pub mod units;

pub use cpu::{Cpu, StepOutcome};
