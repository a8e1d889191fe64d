//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct, the complete architectural register state
//! of an RV32 hart. It provides:
//! 1. **Indexed Registers:** The 32 general-purpose registers, with `x0` hardwired to zero.
//! 2. **Program Counter:** A separate unsigned 32-bit register outside the indexed set.
//! 3. **Observability:** Debugging utilities for dumping register state during simulation.

use crate::core::arch::gpr::Gpr;

/// Register file holding the general-purpose registers and the program counter.
///
/// General-purpose registers are signed 32-bit values. The program counter is always
/// treated as an unsigned 32-bit address and is not reachable through [`RegisterFile::get`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    pc: u32,
}

impl RegisterFile {
    /// Creates a new register file with every register and the PC set to zero.
    pub const fn new() -> Self {
        Self {
            gpr: Gpr::new(),
            pc: 0,
        }
    }

    /// Creates a register file whose program counter starts at `pc`.
    pub const fn with_pc(pc: u32) -> Self {
        Self { gpr: Gpr::new(), pc }
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Returns
    ///
    /// The stored value, or 0 if the register was never written.
    #[inline(always)]
    pub const fn get(&self, idx: usize) -> i32 {
        self.gpr.read(idx)
    }

    /// Writes a general-purpose register. Writes to `x0` are discarded.
    #[inline(always)]
    pub const fn set(&mut self, idx: usize, val: i32) {
        self.gpr.write(idx, val);
    }

    /// Current program counter.
    #[inline(always)]
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Moves the program counter to `pc`.
    #[inline(always)]
    pub const fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Dumps the PC and all general-purpose registers at debug level.
    pub fn dump(&self) {
        tracing::debug!("pc={:08x}", self.pc);
        self.gpr.dump();
    }
}
