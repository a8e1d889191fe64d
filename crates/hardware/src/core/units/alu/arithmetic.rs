//! ALU arithmetic operations.
//!
//! Implements integer addition, subtraction, multiplication, and division for the RV32
//! base set and the full M-extension multiply/divide family. Sums and products wrap to
//! 32 bits. Division never traps: division by zero and the signed overflow case
//! (`i32::MIN / -1`) return fixed results instead.

use super::AluOp;

/// Number of bits in a 32-bit word (used for high-multiply shift).
const WORD_BITS: u32 = 32;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Mulh => ((a as i64 * b as i64) >> WORD_BITS) as i32,
        AluOp::Mulhsu => {
            // a is sign-extended, b is zero-extended.
            ((a as i64 * (b as u32) as i64) >> WORD_BITS) as i32
        }
        AluOp::Mulhu => (((a as u32) as u64 * (b as u32) as u64) >> WORD_BITS) as i32,
        AluOp::Div => {
            if b == 0 {
                -1
            } else {
                // i32::MIN / -1 wraps back to the dividend.
                a.wrapping_div(b)
            }
        }
        AluOp::Divu => {
            if b == 0 {
                u32::MAX as i32
            } else {
                ((a as u32) / (b as u32)) as i32
            }
        }
        AluOp::Rem => {
            if b == 0 {
                a
            } else {
                // i32::MIN % -1 wraps to zero.
                a.wrapping_rem(b)
            }
        }
        AluOp::Remu => {
            if b == 0 {
                u32::MAX as i32
            } else {
                ((a as u32) % (b as u32)) as i32
            }
        }
        _ => 0,
    }
}
