//! ALU bitwise operations and comparison.

use super::AluOp;
use crate::core::arch::Flag;

/// Executes a bitwise operation. `NOT` ignores `b`.
pub fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        _ => 0,
    }
}

/// Three-way comparison of the two register bytes.
///
/// Values compare as stored, `0x00` lowest and `0xFF` highest.
pub fn compare(a: u8, b: u8) -> Flag {
    Flag::from(a.cmp(&b))
}
