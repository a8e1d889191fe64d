//! Instruction Disassembler for RISC-V RV32IM.
//!
//! Converts decoded instructions into human-readable operand strings for the execution
//! log and for test diagnostics. Registers are printed by ABI name and immediates in
//! decimal, except U-type immediates, which show the raw 20-bit field in hex.
//!
//! # Usage
//!
//! ```
//! use rv32sim_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513); // ADDI x10, x0, 10
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use crate::isa::abi::alias;
use crate::isa::decode::decode_kind;
use crate::isa::instruction::Kind;

/// Mask selecting the 20-bit field of a U-type immediate after shifting out the low 12 bits.
const U_FIELD_MASK: u32 = 0xF_FFFF;

/// Renders the operand list of a decoded instruction, without the mnemonic.
///
/// `ebreak` has no operands and renders as an empty string.
pub fn operands(kind: &Kind) -> String {
    match *kind {
        Kind::Branch { rs1, rs2, imm, .. } => {
            format!("{}, {}, {imm}", alias(rs1), alias(rs2))
        }
        Kind::Upper { rd, imm, .. } => {
            format!("{}, {:#x}", alias(rd), ((imm as u32) >> 12) & U_FIELD_MASK)
        }
        Kind::Jal { rd, imm } => format!("{}, {imm}", alias(rd)),
        Kind::Store { rs1, rs2, imm, .. } => {
            format!("{}, {imm}({})", alias(rs2), alias(rs1))
        }
        Kind::Load { rd, rs1, imm, .. } | Kind::Jalr { rd, rs1, imm } => {
            format!("{}, {imm}({})", alias(rd), alias(rs1))
        }
        Kind::OpImm { rd, rs1, imm, .. } => {
            format!("{}, {}, {imm}", alias(rd), alias(rs1))
        }
        Kind::Op { rd, rs1, rs2, .. } => {
            format!("{}, {}, {}", alias(rd), alias(rs1), alias(rs2))
        }
        Kind::Ebreak => String::new(),
    }
}

/// Disassembles a 32-bit RISC-V instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown"` for
/// unrecognised encodings.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    match decode_kind(inst) {
        Ok(Kind::Ebreak) => Kind::Ebreak.name().to_owned(),
        Ok(kind) => format!("{} {}", kind.name(), operands(&kind)),
        Err(_) => "unknown".to_owned(),
    }
}
