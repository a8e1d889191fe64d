//! Common utilities and types used throughout the RV32 simulator.
//!
//! This module provides the building blocks shared by every other component. It includes:
//! 1. **Bit Patterns:** Fixed-width extraction, two's complement and sign extension.
//! 2. **Constants:** Architecture-wide widths, sizes and masks.
//! 3. **Error Handling:** Decode faults and run-terminating simulation errors.
//! 4. **Register Management:** The architectural register file with its program counter.

/// Fixed-width bit pattern utilities.
pub mod bits;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for decoding and simulation.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use bits::{Bits, BitsParseError, encode_twos_complement, slice};
pub use error::{DecodeError, SimError};
pub use reg::RegisterFile;
