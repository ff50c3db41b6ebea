//! # Register File Tests
//!
//! Bounds checking and reset values of the eight-register file.

use ls8_core::common::{RangeKind, RegisterFile, SimError, REGISTER_COUNT, SP_REGISTER, STACK_SEED};
use proptest::prelude::*;

#[test]
fn test_reset_values() {
    let regs = RegisterFile::new();
    let snap = regs.snapshot();
    assert_eq!(snap[SP_REGISTER], STACK_SEED);
    assert!(snap[..SP_REGISTER].iter().all(|&r| r == 0));
}

#[test]
fn test_custom_stack_seed() {
    let regs = RegisterFile::with_stack_seed(0x80);
    assert_eq!(regs.read(SP_REGISTER).unwrap(), 0x80);
}

#[test]
fn test_out_of_range_write_leaves_file_unchanged() {
    let mut regs = RegisterFile::new();
    let before = regs.snapshot();
    let err = regs.write(REGISTER_COUNT, 1).unwrap_err();
    assert!(matches!(
        err,
        SimError::OutOfRange {
            kind: RangeKind::Register,
            index: 8
        }
    ));
    assert_eq!(regs.snapshot(), before);
}

proptest! {
    #[test]
    fn prop_write_then_read(idx in 0usize..REGISTER_COUNT, val in any::<u8>()) {
        let mut regs = RegisterFile::new();
        regs.write(idx, val).unwrap();
        prop_assert_eq!(regs.read(idx).unwrap(), val);
    }

    #[test]
    fn prop_index_past_seven_rejected(idx in REGISTER_COUNT..1024usize) {
        let regs = RegisterFile::new();
        prop_assert!(regs.read(idx).is_err());
    }
}
