//! Simulator error definitions.
//!
//! This module defines the single error type used throughout the emulator. It provides:
//! 1. **Fault Representation:** Out-of-range accesses, illegal opcodes and ALU faults.
//! 2. **Load Errors:** Malformed or oversized program images and I/O failures.
//! 3. **Classification:** Whether a fault ends the run or is recovered in place.

use std::fmt;
use std::io;

use thiserror::Error;

/// Which bounded resource an [`SimError::OutOfRange`] access fell outside of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeKind {
    /// A memory address outside `0x00`-`0xFF`.
    Memory,
    /// A register index outside `0`-`7`.
    Register,
    /// The stack pointer would move below `0x00` or above `0xFF`.
    Stack,
    /// The program counter would advance past the last memory cell.
    ProgramCounter,
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory address"),
            Self::Register => write!(f, "register index"),
            Self::Stack => write!(f, "stack pointer"),
            Self::ProgramCounter => write!(f, "program counter"),
        }
    }
}

/// Errors raised while loading or executing an LS-8 program.
#[derive(Debug, Error)]
pub enum SimError {
    /// A memory address, register index, stack pointer or PC left its bounds.
    #[error("{kind} {index:#x} is out of range")]
    OutOfRange {
        /// The resource that was accessed.
        kind: RangeKind,
        /// The offending index or address.
        index: usize,
    },

    /// A program image line is not a valid 8-bit binary literal.
    #[error("line {line}: `{text}` is not an 8-bit binary literal")]
    MalformedProgram {
        /// 1-based line number in the source text.
        line: usize,
        /// The line content after comment stripping.
        text: String,
    },

    /// The program image does not fit in memory.
    #[error("program image is {len} bytes but memory holds only 256")]
    ProgramTooLarge {
        /// Length of the rejected image.
        len: usize,
    },

    /// The fetched byte does not name any instruction.
    #[error("illegal opcode {opcode:#010b} at {pc:#04x}")]
    IllegalOpcode {
        /// The undecodable byte.
        opcode: u8,
        /// Address it was fetched from.
        pc: u8,
    },

    /// `DIV` or `MOD` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// An opcode outside the ALU group was routed to the ALU.
    #[error("unsupported ALU operation {0:#010b}")]
    UnsupportedAluOp(u8),

    /// The output sink rejected a write.
    #[error("output failed: {0}")]
    Output(String),

    /// Reading a program image from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimError {
    /// Creates an out-of-range error for the given resource and index.
    #[inline]
    pub fn out_of_range(kind: RangeKind, index: usize) -> Self {
        Self::OutOfRange { kind, index }
    }

    /// Returns `true` if this error must stop the run.
    ///
    /// Division by zero is the only fault the engine recovers from; it logs a
    /// warning and leaves the destination register untouched.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::DivisionByZero)
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SimError>;
