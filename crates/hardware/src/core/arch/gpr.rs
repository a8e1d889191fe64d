//! RV32 General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the RV32 architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use crate::common::constants::NUM_REGS;
use crate::isa::abi;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register `x0`
/// is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; NUM_REGS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    ///
    /// # Returns
    ///
    /// A new `Gpr` instance with all registers set to 0.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Only the low 5 bits are used.
    ///
    /// # Returns
    ///
    /// The signed 32-bit value stored in the specified register. Register `x0` always returns 0.
    #[inline(always)]
    pub const fn read(&self, idx: usize) -> i32 {
        let idx = idx % NUM_REGS;
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are discarded.
    /// * `val` - The signed 32-bit value to write.
    #[inline(always)]
    pub const fn write(&mut self, idx: usize, val: i32) {
        let idx = idx % NUM_REGS;
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Dumps the contents of all general-purpose registers at debug level.
    ///
    /// Displays registers in pairs with their ABI names and hexadecimal values.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            tracing::debug!(
                "x{:<2} {:<4}={:08x}  x{:<2} {:<4}={:08x}",
                i,
                abi::alias(i),
                self.read(i) as u32,
                i + 1,
                abi::alias(i + 1),
                self.read(i + 1) as u32
            );
        }
    }
}
