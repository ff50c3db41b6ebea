//! ALU shift operations.
//!
//! The shift amount is the full value of `regB`; shifting by eight or more
//! clears the register.

use super::AluOp;

/// Executes a shift of `a` by `b` bits.
pub fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    let amount = u32::from(b);
    match op {
        AluOp::Shl => a.checked_shl(amount).unwrap_or(0),
        AluOp::Shr => a.checked_shr(amount).unwrap_or(0),
        _ => 0,
    }
}
