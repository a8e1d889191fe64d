//! RISC-V Instruction Decoder.
//!
//! This module handles the decoding of 32-bit RV32IM instruction encodings into the typed
//! [`Instruction`] representation. It selects the format from the opcode, resolves the
//! operation from `funct3` / `funct7`, and reassembles the scattered immediate fields of
//! every format (I, S, B, U, J) with sign extension.
//!
//! Decoding is strict: any opcode or function-code combination that names no RV32IM
//! operation is reported as a [`DecodeError`] rather than falling through to a default.

use crate::common::bits::{Bits, slice};
use crate::common::constants::XLEN;
use crate::common::error::DecodeError;
use crate::common::reg::RegisterFile;
use crate::core::memory::AccessWidth;
use crate::core::units::alu::Alu;
use crate::isa::instruction::{
    BranchOp, Instruction, InstructionBits, Kind, LoadOp, Snapshot, StoreOp, UpperOp,
};
use crate::isa::privileged::opcodes as sys_op;
use crate::isa::rv32i::{funct3, opcodes};

/// Decodes the I-type immediate: `imm[11:0] = inst[31:20]`, sign-extended.
#[inline]
pub const fn imm_i(raw: u32) -> i32 {
    slice(raw, 20, 31).sign_extend(XLEN).to_signed()
}

/// Decodes the S-type immediate: `imm[11:5] = inst[31:25]`, `imm[4:0] = inst[11:7]`.
#[inline]
pub const fn imm_s(raw: u32) -> i32 {
    slice(raw, 25, 31)
        .concat(slice(raw, 7, 11))
        .sign_extend(XLEN)
        .to_signed()
}

/// Decodes the 13-bit B-type immediate.
///
/// Bit order is `inst[31] | inst[7] | inst[30:25] | inst[11:8] | 0`; the offset is
/// always even.
#[inline]
pub const fn imm_b(raw: u32) -> i32 {
    slice(raw, 31, 31)
        .concat(slice(raw, 7, 7))
        .concat(slice(raw, 25, 30))
        .concat(slice(raw, 8, 11))
        .concat(Bits::zero(1))
        .sign_extend(XLEN)
        .to_signed()
}

/// Decodes the U-type immediate: `inst[31:12]` placed in the upper 20 bits.
#[inline]
pub const fn imm_u(raw: u32) -> i32 {
    slice(raw, 12, 31).concat(Bits::zero(12)).to_signed()
}

/// Decodes the 21-bit J-type immediate.
///
/// Bit order is `inst[31] | inst[19:12] | inst[20] | inst[30:21] | 0`.
#[inline]
pub const fn imm_j(raw: u32) -> i32 {
    slice(raw, 31, 31)
        .concat(slice(raw, 12, 19))
        .concat(slice(raw, 20, 20))
        .concat(slice(raw, 21, 30))
        .concat(Bits::zero(1))
        .sign_extend(XLEN)
        .to_signed()
}

/// Decodes a raw instruction word and captures its operand snapshot.
///
/// The snapshot reads the registers named by the raw `[19:15]` and `[24:20]` fields and
/// the current PC, whatever the format, before the instruction has any effect.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownOpcode`] if `[6:0]` selects no format, or
/// [`DecodeError::UnknownFunctionCode`] if the function codes select no operation.
pub fn decode(raw: u32, regs: &RegisterFile) -> Result<Instruction, DecodeError> {
    let kind = decode_kind(raw)?;
    let snapshot = Snapshot {
        raw,
        pc: regs.pc(),
        rs1_val: regs.get(raw.rs1()),
        rs2_val: regs.get(raw.rs2()),
    };
    Ok(Instruction { snapshot, kind })
}

/// Decodes the format-specific fields of a raw instruction word.
///
/// This is the pure half of [`decode`]; it never touches architectural state.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_kind(raw: u32) -> Result<Kind, DecodeError> {
    let opcode = raw.opcode();
    let rd = raw.rd();
    let rs1 = raw.rs1();
    let rs2 = raw.rs2();
    let f3 = raw.funct3();
    let f7 = raw.funct7();

    let unknown_funct = || DecodeError::UnknownFunctionCode {
        raw,
        opcode,
        funct3: f3,
        funct7: f7,
    };

    let kind = match opcode {
        opcodes::OP_BRANCH => {
            let op = match f3 {
                funct3::BEQ => BranchOp::Beq,
                funct3::BNE => BranchOp::Bne,
                funct3::BLT => BranchOp::Blt,
                funct3::BGE => BranchOp::Bge,
                funct3::BLTU => BranchOp::Bltu,
                funct3::BGEU => BranchOp::Bgeu,
                _ => return Err(unknown_funct()),
            };
            Kind::Branch {
                op,
                rs1,
                rs2,
                imm: imm_b(raw),
            }
        }

        opcodes::OP_LUI => Kind::Upper {
            op: UpperOp::Lui,
            rd,
            imm: imm_u(raw),
        },

        opcodes::OP_AUIPC => Kind::Upper {
            op: UpperOp::Auipc,
            rd,
            imm: imm_u(raw),
        },

        opcodes::OP_JAL => Kind::Jal { rd, imm: imm_j(raw) },

        opcodes::OP_STORE => {
            let op = match f3 {
                funct3::SB => StoreOp::Sb,
                funct3::SH => StoreOp::Sh,
                funct3::SW => StoreOp::Sw,
                _ => return Err(unknown_funct()),
            };
            Kind::Store {
                op,
                rs1,
                rs2,
                imm: imm_s(raw),
            }
        }

        opcodes::OP_LOAD => {
            let unsigned = f3 & funct3::LOAD_UNSIGNED_BIT != 0;
            let op = match (AccessWidth::from_log2(f3 & funct3::ACCESS_WIDTH_MASK), unsigned) {
                (Some(AccessWidth::Byte), false) => LoadOp::Lb,
                (Some(AccessWidth::Half), false) => LoadOp::Lh,
                (Some(AccessWidth::Word), false) => LoadOp::Lw,
                (Some(AccessWidth::Byte), true) => LoadOp::Lbu,
                (Some(AccessWidth::Half), true) => LoadOp::Lhu,
                // lwu and the doubleword loads are RV64-only.
                _ => return Err(unknown_funct()),
            };
            Kind::Load {
                op,
                rd,
                rs1,
                imm: imm_i(raw),
            }
        }

        opcodes::OP_JALR => {
            if f3 != funct3::JALR {
                return Err(unknown_funct());
            }
            Kind::Jalr {
                rd,
                rs1,
                imm: imm_i(raw),
            }
        }

        opcodes::OP_IMM => {
            let op = Alu::resolve(opcode, f3, f7).ok_or_else(unknown_funct)?;
            // Shifts carry a 5-bit amount in the rs2 position instead of an immediate.
            // Every other form, andi/ori/xori and sltiu included, sign-extends imm[11:0].
            let imm = if op.is_shift() {
                rs2 as i32
            } else {
                imm_i(raw)
            };
            Kind::OpImm { op, rd, rs1, imm }
        }

        opcodes::OP_REG => {
            let op = Alu::resolve(opcode, f3, f7).ok_or_else(unknown_funct)?;
            Kind::Op { op, rd, rs1, rs2 }
        }

        sys_op::OP_SYSTEM => {
            if raw != sys_op::EBREAK {
                return Err(unknown_funct());
            }
            Kind::Ebreak
        }

        _ => return Err(DecodeError::UnknownOpcode { raw, opcode }),
    };

    Ok(kind)
}
