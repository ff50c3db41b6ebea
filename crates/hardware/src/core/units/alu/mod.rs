//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the LS-8 register-to-register operations. All
//! operands and results are 8 bits wide and wrap on overflow.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Mod, Inc, Dec
//! - [`logic`]:      And, Or, Xor, Not, and the `CMP` comparison
//! - [`shifts`]:     Shl, Shr

/// Integer arithmetic operations.
pub mod arithmetic;

/// Bitwise logical operations and comparison.
pub mod logic;

/// Shift operations.
pub mod shifts;

use crate::common::error::{Result, SimError};
use crate::core::arch::Flag;
use crate::isa::Opcode;

/// Operations that produce a value written back to `regA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Inc,
    Dec,
    And,
    Or,
    Xor,
    Not,
    Shl,
    Shr,
}

impl TryFrom<Opcode> for AluOp {
    type Error = SimError;

    fn try_from(opcode: Opcode) -> Result<Self> {
        Ok(match opcode {
            Opcode::Add => Self::Add,
            Opcode::Sub => Self::Sub,
            Opcode::Mul => Self::Mul,
            Opcode::Div => Self::Div,
            Opcode::Mod => Self::Mod,
            Opcode::Inc => Self::Inc,
            Opcode::Dec => Self::Dec,
            Opcode::And => Self::And,
            Opcode::Or => Self::Or,
            Opcode::Xor => Self::Xor,
            Opcode::Not => Self::Not,
            Opcode::Shl => Self::Shl,
            Opcode::Shr => Self::Shr,
            other => return Err(SimError::UnsupportedAluOp(other.byte())),
        })
    }
}

/// Arithmetic Logic Unit for 8-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// `b` is ignored by the single-operand operations (`INC`, `DEC`, `NOT`).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DivisionByZero`] for `DIV`/`MOD` with `b == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 200, 100).unwrap(), 44);
    /// assert_eq!(Alu::execute(AluOp::Mul, 9, 10).unwrap(), 90);
    /// assert_eq!(Alu::execute(AluOp::Mod, 17, 5).unwrap(), 3);
    /// assert!(Alu::execute(AluOp::Div, 1, 0).is_err());
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8> {
        match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Div
            | AluOp::Mod
            | AluOp::Inc
            | AluOp::Dec => arithmetic::execute(op, a, b),

            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not => Ok(logic::execute(op, a, b)),

            AluOp::Shl | AluOp::Shr => Ok(shifts::execute(op, a, b)),
        }
    }

    /// Compares two register values for `CMP`.
    #[inline]
    pub fn compare(a: u8, b: u8) -> Flag {
        logic::compare(a, b)
    }
}
