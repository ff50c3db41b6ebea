//! Machine-wide constants for the LS-8.
//!
//! Sizes and reset values shared by the memory, register file and engine.

/// Number of addressable memory cells (addresses `0x00`-`0xFF`).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const REGISTER_COUNT: usize = 8;

/// Register reserved as the stack pointer seed.
pub const SP_REGISTER: usize = 7;

/// Reset value of `R7`; the stack grows downward from here.
pub const STACK_SEED: u8 = 0xF4;

/// Address the program image is loaded at and execution begins from.
pub const PROGRAM_BASE: usize = 0;

/// Maximum number of operand bytes following an opcode.
pub const MAX_OPERANDS: usize = 2;
