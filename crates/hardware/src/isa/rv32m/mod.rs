//! RV32M: integer multiply and divide.
//!
//! All eight operations are R-type words on the `OP_REG` major opcode with
//! `funct7 = 0000001`; `funct3` picks the operation. Division never traps: the
//! divide-by-zero and overflow results are fixed values computed by the ALU.

/// `funct3` values of the eight M-extension operations.
pub mod funct3;

/// The `funct7` selector that marks an `OP_REG` word as an M-extension operation.
pub mod opcodes;
