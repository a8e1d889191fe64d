//! Instruction encoding fields and decoded instruction variants.
//!
//! Provides bit extraction for the fixed RISC-V fields and the typed representation a raw
//! word is decoded into. Every decoded [`Instruction`] carries a [`Snapshot`] of the
//! operand registers and PC taken before it executes.

use crate::common::bits::slice;
use crate::core::memory::AccessWidth;
use crate::core::units::alu::AluOp;

/// Trait for extracting instruction fields from encoded instructions.
///
/// All ranges use RISC-V bit numbering, where bit 31 is the most significant bit.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 6-0).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 11-7).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 19-15).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 24-20).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 14-12).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 31-25).
    ///
    /// For I-type shifts this is the upper seven bits of the immediate, which select
    /// between logical and arithmetic right shifts.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        slice(*self, 0, 6).to_unsigned()
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        slice(*self, 7, 11).to_unsigned() as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        slice(*self, 15, 19).to_unsigned() as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        slice(*self, 20, 24).to_unsigned() as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        slice(*self, 12, 14).to_unsigned()
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        slice(*self, 25, 31).to_unsigned()
    }
}

/// Instruction format tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Conditional branch.
    B,
    /// Upper immediate (`lui`, `auipc`).
    U,
    /// Jump and link.
    J,
    /// Store.
    S,
    /// Register-immediate (loads, immediate ALU, `jalr`).
    I,
    /// Register-register ALU and multiply/divide.
    R,
    /// System instruction (halt).
    System,
}

/// Conditional branch comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchOp {
    /// Branch if equal.
    Beq,
    /// Branch if not equal.
    Bne,
    /// Branch if less than (signed).
    Blt,
    /// Branch if greater or equal (signed).
    Bge,
    /// Branch if less than (unsigned).
    Bltu,
    /// Branch if greater or equal (unsigned).
    Bgeu,
}

impl BranchOp {
    /// Evaluates the branch condition on two register values.
    ///
    /// Unsigned comparisons reinterpret both operands as unsigned 32-bit values.
    #[inline]
    pub const fn taken(self, a: i32, b: i32) -> bool {
        match self {
            Self::Beq => a == b,
            Self::Bne => a != b,
            Self::Blt => a < b,
            Self::Bge => a >= b,
            Self::Bltu => (a as u32) < (b as u32),
            Self::Bgeu => (a as u32) >= (b as u32),
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
            Self::Bge => "bge",
            Self::Bltu => "bltu",
            Self::Bgeu => "bgeu",
        }
    }
}

/// Upper-immediate operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpperOp {
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
}

impl UpperOp {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lui => "lui",
            Self::Auipc => "auipc",
        }
    }
}

/// Load operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadOp {
    /// Load byte, sign-extended.
    Lb,
    /// Load halfword, sign-extended.
    Lh,
    /// Load word.
    Lw,
    /// Load byte, zero-extended.
    Lbu,
    /// Load halfword, zero-extended.
    Lhu,
}

impl LoadOp {
    /// Number of bytes read.
    pub const fn width(self) -> AccessWidth {
        match self {
            Self::Lb | Self::Lbu => AccessWidth::Byte,
            Self::Lh | Self::Lhu => AccessWidth::Half,
            Self::Lw => AccessWidth::Word,
        }
    }

    /// Returns true if the loaded value is zero-extended.
    pub const fn is_unsigned(self) -> bool {
        matches!(self, Self::Lbu | Self::Lhu)
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
        }
    }
}

/// Store operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreOp {
    /// Store byte.
    Sb,
    /// Store halfword.
    Sh,
    /// Store word.
    Sw,
}

impl StoreOp {
    /// Number of bytes written.
    pub const fn width(self) -> AccessWidth {
        match self {
            Self::Sb => AccessWidth::Byte,
            Self::Sh => AccessWidth::Half,
            Self::Sw => AccessWidth::Word,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
        }
    }
}

/// State captured when an instruction is decoded, before it executes.
///
/// Logging reads these values after execution, so an instruction that overwrites one of
/// its own source registers still reports the operands it consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Value of the register named by bits `[19:15]`.
    pub rs1_val: i32,
    /// Value of the register named by bits `[24:20]`.
    pub rs2_val: i32,
}

/// Format-specific decoded fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// B-type conditional branch.
    Branch {
        /// Comparison performed.
        op: BranchOp,
        /// First compared register.
        rs1: usize,
        /// Second compared register.
        rs2: usize,
        /// Signed byte offset from the branch PC.
        imm: i32,
    },
    /// U-type `lui` / `auipc`.
    Upper {
        /// Operation performed.
        op: UpperOp,
        /// Destination register.
        rd: usize,
        /// Immediate with the low 12 bits zero.
        imm: i32,
    },
    /// J-type `jal`.
    Jal {
        /// Link register.
        rd: usize,
        /// Signed byte offset from the jump PC.
        imm: i32,
    },
    /// S-type store.
    Store {
        /// Store width.
        op: StoreOp,
        /// Base address register.
        rs1: usize,
        /// Source data register.
        rs2: usize,
        /// Signed address offset.
        imm: i32,
    },
    /// I-type load.
    Load {
        /// Load width and extension.
        op: LoadOp,
        /// Destination register.
        rd: usize,
        /// Base address register.
        rs1: usize,
        /// Signed address offset.
        imm: i32,
    },
    /// I-type `jalr`.
    Jalr {
        /// Link register.
        rd: usize,
        /// Base target register.
        rs1: usize,
        /// Signed target offset.
        imm: i32,
    },
    /// I-type register-immediate ALU operation.
    OpImm {
        /// ALU operation.
        op: AluOp,
        /// Destination register.
        rd: usize,
        /// Source register.
        rs1: usize,
        /// Second operand; the 5-bit shift amount for shifts.
        imm: i32,
    },
    /// R-type register-register ALU or multiply/divide operation.
    Op {
        /// ALU operation.
        op: AluOp,
        /// Destination register.
        rd: usize,
        /// First source register.
        rs1: usize,
        /// Second source register.
        rs2: usize,
    },
    /// `ebreak`: halts the simulation.
    Ebreak,
}

/// A decoded instruction: format-specific fields plus the decode-time snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Operand registers and PC as they were when the instruction was decoded.
    pub snapshot: Snapshot,
    /// Format-specific fields.
    pub kind: Kind,
}

impl Instruction {
    /// Instruction format tag.
    pub const fn format(&self) -> Format {
        match self.kind {
            Kind::Branch { .. } => Format::B,
            Kind::Upper { .. } => Format::U,
            Kind::Jal { .. } => Format::J,
            Kind::Store { .. } => Format::S,
            Kind::Load { .. } | Kind::Jalr { .. } | Kind::OpImm { .. } => Format::I,
            Kind::Op { .. } => Format::R,
            Kind::Ebreak => Format::System,
        }
    }

    /// Resolved operation name, e.g. `addi` or `mulhsu`.
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Decoded immediate, if the format has one.
    pub const fn imm(&self) -> Option<i32> {
        match self.kind {
            Kind::Branch { imm, .. }
            | Kind::Upper { imm, .. }
            | Kind::Jal { imm, .. }
            | Kind::Store { imm, .. }
            | Kind::Load { imm, .. }
            | Kind::Jalr { imm, .. }
            | Kind::OpImm { imm, .. } => Some(imm),
            Kind::Op { .. } | Kind::Ebreak => None,
        }
    }
}

impl Kind {
    /// Resolved operation name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Branch { op, .. } => op.mnemonic(),
            Self::Upper { op, .. } => op.mnemonic(),
            Self::Jal { .. } => "jal",
            Self::Store { op, .. } => op.mnemonic(),
            Self::Load { op, .. } => op.mnemonic(),
            Self::Jalr { .. } => "jalr",
            Self::OpImm { op, .. } => op.imm_mnemonic(),
            Self::Op { op, .. } => op.mnemonic(),
            Self::Ebreak => "ebreak",
        }
    }
}
