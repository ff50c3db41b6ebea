//! Memory and peripherals attached to the LS-8 core.
//!
//! This module contains everything the engine talks to outside its registers:
//! 1. **Memory:** The flat 256-byte RAM.
//! 2. **Traits:** The `Reporter` output sink used by `PRN`/`PRA`.
//! 3. **Console:** Stdout and in-memory reporter implementations.

/// Stdout and capturing reporters.
pub mod console;

/// Main memory.
pub mod memory;

/// The output sink trait.
pub mod traits;

pub use console::{CaptureReporter, OutputEvent, WriterReporter};
pub use memory::Memory;
pub use traits::Reporter;
