//! LS-8 opcode values.
//!
//! Bit layout of every opcode: `AABCDDDD`
//! - `AA`   number of operands (0-2)
//! - `B`    1 for operations handled by the ALU
//! - `C`    1 if the instruction sets the PC itself
//! - `DDDD` operation identifier

// Control and I/O.

/// No operation.
pub const NOP: u8 = 0b0000_0000;
/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;
/// Load immediate into register.
pub const LDI: u8 = 0b1000_0010;
/// Load register from memory address held in register.
pub const LD: u8 = 0b1000_0011;
/// Store register to memory address held in register.
pub const ST: u8 = 0b1000_0100;
/// Print register as decimal.
pub const PRN: u8 = 0b0100_0111;
/// Print register as ASCII.
pub const PRA: u8 = 0b0100_1000;

// Stack and subroutines.

/// Push register onto the stack.
pub const PUSH: u8 = 0b0100_0101;
/// Pop the stack into register.
pub const POP: u8 = 0b0100_0110;
/// Call subroutine at address in register.
pub const CALL: u8 = 0b0101_0000;
/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

// Jumps.

/// Unconditional jump.
pub const JMP: u8 = 0b0101_0100;
/// Jump if equal.
pub const JEQ: u8 = 0b0101_0101;
/// Jump if not equal.
pub const JNE: u8 = 0b0101_0110;
/// Jump if greater than.
pub const JGT: u8 = 0b0101_0111;
/// Jump if less than.
pub const JLT: u8 = 0b0101_1000;
/// Jump if less than or equal.
pub const JLE: u8 = 0b0101_1001;
/// Jump if greater than or equal.
pub const JGE: u8 = 0b0101_1010;

// ALU.

/// Add.
pub const ADD: u8 = 0b1010_0000;
/// Subtract.
pub const SUB: u8 = 0b1010_0001;
/// Multiply.
pub const MUL: u8 = 0b1010_0010;
/// Divide (quotient).
pub const DIV: u8 = 0b1010_0011;
/// "Modulo"; stores the quotient like `DIV`.
pub const MOD: u8 = 0b1010_0100;
/// Increment.
pub const INC: u8 = 0b0110_0101;
/// Decrement.
pub const DEC: u8 = 0b0110_0110;
/// Compare and set the flag.
pub const CMP: u8 = 0b1010_0111;
/// Bitwise AND.
pub const AND: u8 = 0b1010_1000;
/// Bitwise NOT.
pub const NOT: u8 = 0b0110_1001;
/// Bitwise OR.
pub const OR: u8 = 0b1010_1010;
/// Bitwise XOR.
pub const XOR: u8 = 0b1010_1011;
/// Shift left.
pub const SHL: u8 = 0b1010_1100;
/// Shift right.
pub const SHR: u8 = 0b1010_1101;
