//! LS-8 emulator library.
//!
//! This crate implements an emulator for the LS-8, an 8-bit teaching CPU with
//! 256 bytes of memory and eight registers:
//! 1. **Core:** Fetch/decode/execute engine, stack discipline, jumps and the ALU.
//! 2. **ISA:** Opcode encoding, decoding and disassembly.
//! 3. **SoC:** Main memory and the output reporter.
//! 4. **Simulation:** Program loader, bounded runs, configuration and statistics.
//!
//! ```
//! use ls8_core::{CaptureReporter, Cpu};
//!
//! let mut cpu = Cpu::new(CaptureReporter::new());
//! cpu.load(&[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]).unwrap();
//! cpu.run().unwrap();
//! assert_eq!(cpu.reporter.text(), "8\n");
//! ```

/// Common types and constants (errors, register file).
pub mod common;
/// Run configuration.
pub mod config;
/// CPU core (arch state, execution, ALU).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and simulator.
pub mod sim;
/// Memory and output devices.
pub mod soc;
/// Execution statistics.
pub mod stats;

/// Crate-wide error type.
pub use crate::common::{Result, SimError};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; owns all machine state.
pub use crate::core::{Cpu, StepOutcome};
/// Bounded-run wrapper around a CPU.
pub use crate::sim::{RunOutcome, Simulator};
/// Output sinks.
pub use crate::soc::{CaptureReporter, Reporter, WriterReporter};
