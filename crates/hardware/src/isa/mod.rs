//! LS-8 Instruction Set Architecture.
//!
//! This module defines the encoding and decoding of LS-8 instructions:
//! 1. **Opcodes:** Bit-exact opcode values.
//! 2. **Instruction:** Opcode bit-fields, the closed `Opcode` enum and the decoded view.
//! 3. **Decode:** Fetching an instruction and its operands from memory.
//! 4. **Disassembly:** Mnemonic rendering for traces and listings.

/// Instruction decoder.
pub mod decode;

/// Instruction disassembler for tracing and listings.
pub mod disasm;

/// Opcode bit-fields, `Opcode` enum and `Decoded` instruction.
pub mod instruction;

/// Opcode constants.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Decoded, InstructionBits, InstructionClass, Opcode};
