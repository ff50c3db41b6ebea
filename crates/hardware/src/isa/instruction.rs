//! Instruction encoding and decoding utilities.
//!
//! Provides bit-field extraction for LS-8 opcodes, the closed [`Opcode`] set,
//! and the [`Decoded`] view of one instruction.

use std::fmt;

use super::opcodes as op;

/// Bit shift of the operand-count field (bits 7-6).
const OPERAND_COUNT_SHIFT: u8 = 6;
/// Mask of the operand-count field after shifting.
const OPERAND_COUNT_MASK: u8 = 0b11;
/// Bit marking ALU operations (bit 5).
const ALU_SHIFT: u8 = 5;
/// Bit marking instructions that set the PC themselves (bit 4).
const SETS_PC_SHIFT: u8 = 4;

/// Field extraction for raw opcode bytes.
pub trait InstructionBits {
    /// Number of operand bytes following the opcode (bits 7-6).
    fn operand_count(&self) -> u8;

    /// Total instruction length in bytes (`operand_count + 1`).
    fn instruction_len(&self) -> u8;

    /// Whether the ALU marker (bit 5) is set.
    fn is_alu(&self) -> bool;

    /// Whether the instruction writes the PC itself (bit 4).
    ///
    /// When set, the engine does not auto-advance the PC after the handler.
    fn sets_pc(&self) -> bool;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> u8 {
        (self >> OPERAND_COUNT_SHIFT) & OPERAND_COUNT_MASK
    }

    #[inline(always)]
    fn instruction_len(&self) -> u8 {
        self.operand_count() + 1
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        (self >> ALU_SHIFT) & 1 == 1
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        (self >> SETS_PC_SHIFT) & 1 == 1
    }
}

/// Every instruction the LS-8 understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Opcode {
    Nop = op::NOP,
    Hlt = op::HLT,
    Ldi = op::LDI,
    Ld = op::LD,
    St = op::ST,
    Prn = op::PRN,
    Pra = op::PRA,
    Push = op::PUSH,
    Pop = op::POP,
    Call = op::CALL,
    Ret = op::RET,
    Jmp = op::JMP,
    Jeq = op::JEQ,
    Jne = op::JNE,
    Jgt = op::JGT,
    Jlt = op::JLT,
    Jle = op::JLE,
    Jge = op::JGE,
    Add = op::ADD,
    Sub = op::SUB,
    Mul = op::MUL,
    Div = op::DIV,
    Mod = op::MOD,
    Inc = op::INC,
    Dec = op::DEC,
    Cmp = op::CMP,
    And = op::AND,
    Not = op::NOT,
    Or = op::OR,
    Xor = op::XOR,
    Shl = op::SHL,
    Shr = op::SHR,
}

impl Opcode {
    /// All opcodes, in table order.
    pub const ALL: [Self; 32] = [
        Self::Nop,
        Self::Hlt,
        Self::Ldi,
        Self::Ld,
        Self::St,
        Self::Prn,
        Self::Pra,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Ret,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
        Self::Jgt,
        Self::Jlt,
        Self::Jle,
        Self::Jge,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Inc,
        Self::Dec,
        Self::Cmp,
        Self::And,
        Self::Not,
        Self::Or,
        Self::Xor,
        Self::Shl,
        Self::Shr,
    ];

    /// Looks up the opcode for a raw byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.byte() == byte)
    }

    /// The encoded byte.
    #[inline(always)]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Ld => "LD",
            Self::St => "ST",
            Self::Prn => "PRN",
            Self::Pra => "PRA",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Jgt => "JGT",
            Self::Jlt => "JLT",
            Self::Jle => "JLE",
            Self::Jge => "JGE",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::Cmp => "CMP",
            Self::And => "AND",
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        }
    }

    /// Coarse instruction class, used for statistics.
    pub const fn class(self) -> InstructionClass {
        match self {
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Mod
            | Self::Inc
            | Self::Dec
            | Self::Cmp
            | Self::And
            | Self::Not
            | Self::Or
            | Self::Xor
            | Self::Shl
            | Self::Shr => InstructionClass::Alu,
            Self::Push | Self::Pop => InstructionClass::Stack,
            Self::Call
            | Self::Ret
            | Self::Jmp
            | Self::Jeq
            | Self::Jne
            | Self::Jgt
            | Self::Jlt
            | Self::Jle
            | Self::Jge => InstructionClass::Branch,
            Self::Ld | Self::St | Self::Ldi => InstructionClass::LoadStore,
            Self::Prn | Self::Pra => InstructionClass::Io,
            Self::Nop | Self::Hlt => InstructionClass::System,
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(byte)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Instruction categories tracked by the statistics counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstructionClass {
    /// Arithmetic, logic and compare.
    Alu,
    /// `PUSH` and `POP`.
    Stack,
    /// Jumps, `CALL` and `RET`.
    Branch,
    /// `LDI`, `LD` and `ST`.
    LoadStore,
    /// `PRN` and `PRA`.
    Io,
    /// `NOP` and `HLT`.
    System,
}

/// A fetched and decoded instruction.
///
/// Both operand bytes are always captured; only the ones the opcode consumes
/// are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Address the opcode was fetched from.
    pub pc: u8,
    /// The decoded operation.
    pub opcode: Opcode,
    /// First operand byte (`PC + 1`).
    pub operand_a: u8,
    /// Second operand byte (`PC + 2`).
    pub operand_b: u8,
}

impl Decoded {
    /// Raw opcode byte.
    #[inline(always)]
    pub const fn raw(&self) -> u8 {
        self.opcode.byte()
    }

    /// Instruction length in bytes.
    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.raw().instruction_len()
    }

    /// Whether the handler owns the PC.
    #[inline(always)]
    pub fn sets_pc(&self) -> bool {
        self.raw().sets_pc()
    }
}
