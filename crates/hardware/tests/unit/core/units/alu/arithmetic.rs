//! ALU Arithmetic Operation Tests
//!
//! Edge-case vectors for ADD, SUB, MUL, DIV, MOD, INC and DEC:
//!   - Boundary values (0, 1, 0xFF)
//!   - Wrapping on overflow and underflow
//!   - Zero divisors

use ls8_core::SimError;
use ls8_core::core::units::alu::{Alu, AluOp};
use proptest::prelude::*;
use rstest::rstest;

const MAX: u8 = u8::MAX;

fn alu(op: AluOp, a: u8, b: u8) -> u8 {
    Alu::execute(op, a, b).unwrap()
}

#[rstest]
#[case(0, 0, 0)]
#[case(2, 3, 5)]
#[case(200, 100, 44)]
#[case(MAX, 1, 0)]
#[case(MAX, MAX, 254)]
fn add_wraps(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(alu(AluOp::Add, a, b), expected);
}

#[rstest]
#[case(5, 3, 2)]
#[case(0, 1, MAX)]
#[case(3, 5, 254)]
#[case(MAX, MAX, 0)]
fn sub_wraps(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(alu(AluOp::Sub, a, b), expected);
}

#[rstest]
#[case(8, 9, 72)]
#[case(9, 10, 90)]
#[case(16, 16, 0)]
#[case(MAX, 2, 254)]
#[case(0, MAX, 0)]
fn mul_wraps(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(alu(AluOp::Mul, a, b), expected);
}

#[test]
fn div_truncates() {
    assert_eq!(alu(AluOp::Div, 17, 5), 3);
    assert_eq!(alu(AluOp::Div, 4, 5), 0);
    assert_eq!(alu(AluOp::Div, MAX, 1), MAX);
}

#[test]
fn mod_stores_quotient() {
    assert_eq!(alu(AluOp::Mod, 17, 5), 3);
    assert_eq!(alu(AluOp::Mod, 10, 2), 5);
}

#[rstest]
#[case(AluOp::Div)]
#[case(AluOp::Mod)]
fn zero_divisor_faults(#[case] op: AluOp) {
    assert!(matches!(
        Alu::execute(op, 42, 0),
        Err(SimError::DivisionByZero)
    ));
}

#[test]
fn inc_dec_wrap_and_ignore_b() {
    assert_eq!(alu(AluOp::Inc, MAX, 77), 0);
    assert_eq!(alu(AluOp::Inc, 41, 0), 42);
    assert_eq!(alu(AluOp::Dec, 0, 77), MAX);
    assert_eq!(alu(AluOp::Dec, 43, 0), 42);
}

proptest! {
    #[test]
    fn prop_add_is_mod_256(a: u8, b: u8) {
        prop_assert_eq!(alu(AluOp::Add, a, b) as u32, (a as u32 + b as u32) % 256);
    }

    #[test]
    fn prop_mul_is_mod_256(a: u8, b: u8) {
        prop_assert_eq!(alu(AluOp::Mul, a, b) as u32, (a as u32 * b as u32) % 256);
    }

    #[test]
    fn prop_sub_inverts_add(a: u8, b: u8) {
        prop_assert_eq!(alu(AluOp::Sub, alu(AluOp::Add, a, b), b), a);
    }

    #[test]
    fn prop_div_matches_integer_division(a in any::<u8>(), b in 1u8..=255) {
        prop_assert_eq!(alu(AluOp::Div, a, b), a / b);
    }
}
