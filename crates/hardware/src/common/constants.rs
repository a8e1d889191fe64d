//! Global Simulator Constants.
//!
//! This module defines constants shared across the simulator. It includes:
//! 1. **Architecture Constants:** Register count and word width of the RV32 core.
//! 2. **Instruction Constants:** Instruction size and the PC alignment mask for `jalr`.
//! 3. **Memory Constants:** Default fill value for unmapped bytes.

/// Number of general-purpose registers (`x0`-`x31`).
pub const NUM_REGS: usize = 32;

/// Register width in bits.
pub const XLEN: u32 = 32;

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Mask applied to `jalr` targets to clear the least significant bit.
pub const JALR_TARGET_MASK: u32 = !1;

/// Value returned for memory bytes that were never written.
pub const DEFAULT_MEMORY_FILL: u8 = 0x00;

/// Mask selecting the shift amount from the second ALU operand.
pub const SHAMT_MASK: u32 = 0x1F;
