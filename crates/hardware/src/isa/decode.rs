//! LS-8 Instruction Decoder.
//!
//! Turns the byte at the program counter and the two bytes after it into a
//! [`Decoded`] instruction.

use crate::common::constants::MAX_OPERANDS;
use crate::common::error::{Result, SimError};
use crate::isa::instruction::{Decoded, InstructionBits, Opcode};
use crate::soc::memory::Memory;

/// Fetches and decodes the instruction at `pc`.
///
/// Both operand slots are always filled. The ones the opcode consumes must lie
/// inside memory; unused slots past `0xFF` read as zero.
///
/// # Errors
///
/// Returns [`SimError::IllegalOpcode`] if the byte at `pc` is not an LS-8 opcode,
/// or [`SimError::OutOfRange`] (kind `Memory`) if a consumed operand lies past `0xFF`.
pub fn decode(mem: &Memory, pc: u8) -> Result<Decoded> {
    let raw = mem.read(pc as usize)?;
    let opcode = Opcode::from_byte(raw).ok_or(SimError::IllegalOpcode { opcode: raw, pc })?;

    let used = raw.operand_count() as usize;
    let mut operands = [0u8; MAX_OPERANDS];
    for (i, slot) in operands.iter_mut().enumerate() {
        let addr = pc as usize + 1 + i;
        *slot = if i < used {
            mem.read(addr)?
        } else {
            mem.read(addr).unwrap_or(0)
        };
    }

    Ok(Decoded {
        pc,
        opcode,
        operand_a: operands[0],
        operand_b: operands[1],
    })
}
