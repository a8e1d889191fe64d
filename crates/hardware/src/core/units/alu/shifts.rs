//! ALU shift operations.
//!
//! Only the low five bits of the shift amount are used, so shifting by 32 or more wraps
//! around instead of clearing the value.

use super::AluOp;
use crate::common::constants::SHAMT_MASK;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to shift.
/// * `b`  - The shift amount; bits above the low five are ignored.
///
/// # Returns
///
/// The shifted 32-bit result. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    let shamt = (b as u32) & SHAMT_MASK;
    match op {
        AluOp::Sll => ((a as u32) << shamt) as i32,
        AluOp::Srl => ((a as u32) >> shamt) as i32,
        AluOp::Sra => a >> shamt,
        _ => 0,
    }
}
