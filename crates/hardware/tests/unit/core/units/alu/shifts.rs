//! ALU Shift Tests.
//!
//! Only the low five bits of the shift amount take effect.

use rstest::rstest;
use rv32sim_core::core::units::alu::{Alu, AluOp};

#[rstest]
#[case(AluOp::Sll, 1, 31, i32::MIN)]
#[case(AluOp::Sll, 1, 32, 1)] // amount masked to 0
#[case(AluOp::Sll, 1, 36, 16)]
#[case(AluOp::Srl, i32::MIN, 31, 1)]
#[case(AluOp::Srl, -1, 4, 0x0FFF_FFFF)]
#[case(AluOp::Sra, i32::MIN, 31, -1)]
#[case(AluOp::Sra, -16, 2, -4)]
#[case(AluOp::Sra, 16, 2, 4)]
#[case(AluOp::Sra, -1, -1, -1)] // amount 0xFFFFFFFF masks to 31
fn shift_table(#[case] op: AluOp, #[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}
