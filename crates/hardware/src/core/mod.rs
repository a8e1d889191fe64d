//! Core processor implementation.
//!
//! This module contains the architectural state of the hart and the units that act on it:
//! the register file, sparse memory, the integer ALU, and per-instruction execution.

/// Architecture-specific components (general-purpose registers).
pub mod arch;

/// Applies decoded instructions to registers, memory and the PC.
pub mod execution;

/// Sparse byte-addressable memory.
pub mod memory;

/// Execution units (ALU).
pub mod units;

pub use self::execution::Control;
pub use self::memory::{AccessWidth, SparseMemory};
