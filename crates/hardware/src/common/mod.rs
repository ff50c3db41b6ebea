//! Common utilities and types used throughout the LS-8 emulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Memory size, register count and reset values.
//! 2. **Error Handling:** The `SimError` taxonomy and the crate `Result` alias.
//! 3. **Register Management:** The checked eight-register file.

/// Machine-wide constants.
pub mod constants;

/// Error types and fault classification.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT, SP_REGISTER, STACK_SEED};
pub use error::{RangeKind, Result, SimError};
pub use reg::RegisterFile;
