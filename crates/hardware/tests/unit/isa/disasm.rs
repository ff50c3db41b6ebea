//! # Disassembler Tests

use ls8_core::isa::Opcode;
use ls8_core::isa::disasm::{disassemble, disassemble_image};
use ls8_core::isa::opcodes as op;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(op::HLT, 0, 0, "HLT")]
#[case(op::RET, 9, 9, "RET")]
#[case(op::LDI, 2, 200, "LDI R2, 200")]
#[case(op::PRN, 3, 0, "PRN R3")]
#[case(op::PUSH, 1, 0, "PUSH R1")]
#[case(op::ADD, 0, 1, "ADD R0, R1")]
#[case(op::CMP, 4, 5, "CMP R4, R5")]
#[case(op::NOT, 6, 0, "NOT R6")]
#[case(0b1111_1111, 0, 0, ".byte 0b11111111")]
fn formats(#[case] raw: u8, #[case] a: u8, #[case] b: u8, #[case] expected: &str) {
    assert_eq!(disassemble(raw, a, b), expected);
}

#[test]
fn every_opcode_starts_with_its_mnemonic() {
    for opcode in Opcode::ALL {
        let text = disassemble(opcode.byte(), 1, 2);
        assert!(text.starts_with(opcode.mnemonic()), "{text}");
    }
}

#[test]
fn listing_of_mult_program() {
    let image = [
        op::LDI, 0, 8,
        op::LDI, 1, 9,
        op::MUL, 0, 1,
        op::PRN, 0,
        op::HLT,
    ];
    assert_eq!(
        disassemble_image(&image),
        vec![
            "00: LDI R0, 8",
            "03: LDI R1, 9",
            "06: MUL R0, R1",
            "09: PRN R0",
            "0B: HLT",
        ]
    );
}

#[test]
fn listing_resyncs_after_unknown_byte() {
    let image = [0xFF, op::HLT];
    assert_eq!(disassemble_image(&image), vec!["00: .byte 0b11111111", "01: HLT"]);
}
