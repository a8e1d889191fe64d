//! RISC-V System Opcodes.
//!
//! Defines the system opcode and the encodings recognised under it.

/// System instruction opcode (0b1110011).
pub const OP_SYSTEM: u32 = 0b1110011;

/// Environment Break (EBREAK). Halts the simulation.
pub const EBREAK: u32 = 0x0010_0073;
