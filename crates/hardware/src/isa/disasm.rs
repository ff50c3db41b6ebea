//! Instruction Disassembler for the LS-8.
//!
//! Converts an opcode and its operand bytes into a mnemonic string for
//! instruction tracing and the CLI `disasm` command.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b1000_0010, 0, 8), "LDI R0, 8");
//! assert_eq!(disassemble(0b1010_0010, 0, 1), "MUL R0, R1");
//! ```

use crate::isa::instruction::{InstructionBits, Opcode};

/// Disassembles one instruction.
///
/// Unknown opcodes are rendered as a `.byte` directive.
pub fn disassemble(raw: u8, a: u8, b: u8) -> String {
    let Some(opcode) = Opcode::from_byte(raw) else {
        return format!(".byte {raw:#010b}");
    };
    let m = opcode.mnemonic();
    match opcode {
        Opcode::Ldi => format!("{m} R{a}, {b}"),
        _ => match raw.operand_count() {
            0 => m.to_string(),
            1 => format!("{m} R{a}"),
            _ => format!("{m} R{a}, R{b}"),
        },
    }
}

/// Disassembles a whole program image, one line per instruction.
///
/// Each line is prefixed with its address. Bytes that do not decode are
/// emitted as single-byte `.byte` lines so the listing stays aligned.
pub fn disassemble_image(image: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut addr = 0usize;
    while addr < image.len() {
        let raw = image[addr];
        let a = image.get(addr + 1).copied().unwrap_or(0);
        let b = image.get(addr + 2).copied().unwrap_or(0);
        let len = if Opcode::from_byte(raw).is_some() {
            raw.instruction_len() as usize
        } else {
            1
        };
        lines.push(format!("{addr:02X}: {}", disassemble(raw, a, b)));
        addr += len;
    }
    lines
}
