//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU of the RV32 core. It resolves the operation
//! selected by an `(opcode, funct3, funct7)` triple and computes its 32-bit result for
//! the base integer set and the Multiply/Divide (M) extension.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Mulh, Mulhsu, Mulhu, Div, Divu, Rem, Remu
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::isa::rv32i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};
use crate::isa::rv32m::{funct3 as m_f3, opcodes as m_op};

/// Integer ALU operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Integer addition.
    #[default]
    Add,
    /// Integer subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Integer multiply (low bits).
    Mul,
    /// Integer multiply (high bits, signed × signed).
    Mulh,
    /// Integer multiply (high bits, signed × unsigned).
    Mulhsu,
    /// Integer multiply (high bits, unsigned × unsigned).
    Mulhu,
    /// Signed division.
    Div,
    /// Unsigned division.
    Divu,
    /// Signed remainder.
    Rem,
    /// Unsigned remainder.
    Remu,
}

impl AluOp {
    /// Mnemonic of the register-register form.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
            Self::Mul => "mul",
            Self::Mulh => "mulh",
            Self::Mulhsu => "mulhsu",
            Self::Mulhu => "mulhu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Rem => "rem",
            Self::Remu => "remu",
        }
    }

    /// Mnemonic of the register-immediate form.
    ///
    /// Operations without an immediate encoding (`sub` and the M extension) keep their
    /// register-form name; [`Alu::resolve`] never produces them for `OP_IMM`.
    pub const fn imm_mnemonic(self) -> &'static str {
        match self {
            Self::Add => "addi",
            Self::Sll => "slli",
            Self::Slt => "slti",
            Self::Sltu => "sltiu",
            Self::Xor => "xori",
            Self::Srl => "srli",
            Self::Sra => "srai",
            Self::Or => "ori",
            Self::And => "andi",
            other => other.mnemonic(),
        }
    }

    /// Returns true for shift operations, whose second operand is a 5-bit amount.
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Sll | Self::Srl | Self::Sra)
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Implements all RV32 integer arithmetic and logical operations including addition,
/// subtraction, shifts, comparisons, and multiply/divide operations from the I and M
/// extensions.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Resolves the ALU operation selected by an instruction's opcode and function codes.
    ///
    /// For `OP_IMM` the `funct7` argument is the upper seven immediate bits; it is only
    /// consulted for shifts. For `OP_REG`, `funct7 == 0000001` selects the M extension and
    /// otherwise must be `0000000`, or `0100000` where it distinguishes `sub` and `sra`.
    ///
    /// # Returns
    ///
    /// `None` when the combination names no operation; decoding reports it as an unknown
    /// function code.
    pub const fn resolve(opcode: u32, funct3: u32, funct7: u32) -> Option<AluOp> {
        match opcode {
            i_op::OP_IMM => match funct3 {
                i_f3::ADD_SUB => Some(AluOp::Add),
                i_f3::SLT => Some(AluOp::Slt),
                i_f3::SLTU => Some(AluOp::Sltu),
                i_f3::XOR => Some(AluOp::Xor),
                i_f3::OR => Some(AluOp::Or),
                i_f3::AND => Some(AluOp::And),
                i_f3::SLL => match funct7 {
                    i_f7::DEFAULT => Some(AluOp::Sll),
                    _ => None,
                },
                i_f3::SRL_SRA => match funct7 {
                    i_f7::DEFAULT => Some(AluOp::Srl),
                    i_f7::SRA => Some(AluOp::Sra),
                    _ => None,
                },
                _ => None,
            },
            i_op::OP_REG => match funct7 {
                m_op::M_EXTENSION => match funct3 {
                    m_f3::MUL => Some(AluOp::Mul),
                    m_f3::MULH => Some(AluOp::Mulh),
                    m_f3::MULHSU => Some(AluOp::Mulhsu),
                    m_f3::MULHU => Some(AluOp::Mulhu),
                    m_f3::DIV => Some(AluOp::Div),
                    m_f3::DIVU => Some(AluOp::Divu),
                    m_f3::REM => Some(AluOp::Rem),
                    m_f3::REMU => Some(AluOp::Remu),
                    _ => None,
                },
                i_f7::DEFAULT => match funct3 {
                    i_f3::ADD_SUB => Some(AluOp::Add),
                    i_f3::SLL => Some(AluOp::Sll),
                    i_f3::SLT => Some(AluOp::Slt),
                    i_f3::SLTU => Some(AluOp::Sltu),
                    i_f3::XOR => Some(AluOp::Xor),
                    i_f3::SRL_SRA => Some(AluOp::Srl),
                    i_f3::OR => Some(AluOp::Or),
                    i_f3::AND => Some(AluOp::And),
                    _ => None,
                },
                i_f7::SUB => match funct3 {
                    i_f3::ADD_SUB => Some(AluOp::Sub),
                    i_f3::SRL_SRA => Some(AluOp::Sra),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        }
    }

    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (also used as shift amount)
    ///
    /// # Returns
    ///
    /// The 32-bit result, as the signed value written back to the register file.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Add, i32::MAX, 1), i32::MIN);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 36), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Div, 7, 0), -1);
    /// ```
    pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
        match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Mulh
            | AluOp::Mulhsu
            | AluOp::Mulhu
            | AluOp::Div
            | AluOp::Divu
            | AluOp::Rem
            | AluOp::Remu => arithmetic::execute(op, a, b),

            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }

            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
