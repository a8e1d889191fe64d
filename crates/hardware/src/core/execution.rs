//! Instruction Execution.
//!
//! This module applies a decoded instruction to the architectural state. It performs the
//! following:
//! 1. **Operand Read:** Source operands come from the decode-time snapshot, so a write to
//!    `rd` never disturbs an operand of the same instruction.
//! 2. **Effect:** Register writeback through the ALU or load unit, memory stores, and
//!    branch/jump target computation.
//! 3. **PC Update:** Sequential advance by 4, a taken branch or jump target, or no change
//!    at all for the halt instruction.

use crate::common::bits::Bits;
use crate::common::constants::{INSTRUCTION_SIZE, JALR_TARGET_MASK, XLEN};
use crate::common::reg::RegisterFile;
use crate::core::memory::SparseMemory;
use crate::core::units::alu::Alu;
use crate::isa::instruction::{Instruction, Kind, LoadOp, UpperOp};

/// What the simulator loop should do after an instruction retires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Fetch the next instruction at the updated PC.
    Continue,
    /// Stop the run; the PC still addresses the halt instruction.
    Halt,
}

impl Instruction {
    /// Executes the instruction against the register file and memory.
    ///
    /// # Returns
    ///
    /// [`Control::Halt`] for `ebreak`, which leaves all state untouched, and
    /// [`Control::Continue`] for every other instruction.
    pub fn execute(&self, regs: &mut RegisterFile, mem: &mut SparseMemory) -> Control {
        let Self { snapshot, kind } = *self;
        let pc = snapshot.pc;
        let next_pc = pc.wrapping_add(INSTRUCTION_SIZE);
        let rs1_val = snapshot.rs1_val;
        let rs2_val = snapshot.rs2_val;

        let new_pc = match kind {
            Kind::Branch { op, imm, .. } => {
                if op.taken(rs1_val, rs2_val) {
                    pc.wrapping_add_signed(imm)
                } else {
                    next_pc
                }
            }

            Kind::Upper { op, rd, imm } => {
                let val = match op {
                    UpperOp::Lui => imm,
                    UpperOp::Auipc => pc.wrapping_add_signed(imm) as i32,
                };
                regs.set(rd, val);
                next_pc
            }

            Kind::Jal { rd, imm } => {
                regs.set(rd, next_pc as i32);
                pc.wrapping_add_signed(imm)
            }

            Kind::Store { op, imm, .. } => {
                let addr = (rs1_val as u32).wrapping_add_signed(imm);
                mem.store(addr, op.width(), rs2_val as u32);
                next_pc
            }

            Kind::Load { op, rd, imm, .. } => {
                let addr = (rs1_val as u32).wrapping_add_signed(imm);
                regs.set(rd, load_extended(mem, addr, op));
                next_pc
            }

            Kind::Jalr { rd, imm, .. } => {
                let target = (rs1_val as u32).wrapping_add_signed(imm) & JALR_TARGET_MASK;
                regs.set(rd, next_pc as i32);
                target
            }

            Kind::OpImm { op, rd, imm, .. } => {
                regs.set(rd, Alu::execute(op, rs1_val, imm));
                next_pc
            }

            Kind::Op { op, rd, .. } => {
                regs.set(rd, Alu::execute(op, rs1_val, rs2_val));
                next_pc
            }

            Kind::Ebreak => return Control::Halt,
        };

        regs.set_pc(new_pc);
        Control::Continue
    }
}

/// Reads `op.width()` bytes at `addr` and extends them to 32 bits.
fn load_extended(mem: &SparseMemory, addr: u32, op: LoadOp) -> i32 {
    let width = op.width();
    let raw = Bits::new(mem.load(addr, width), width.bits());
    if op.is_unsigned() {
        raw.zero_extend(XLEN).to_signed()
    } else {
        raw.sign_extend(XLEN).to_signed()
    }
}
