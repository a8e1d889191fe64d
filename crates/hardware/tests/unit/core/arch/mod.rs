//! # Architectural Components
//!
//! Tests for the architectural register storage of the hart.

/// Unit tests for the General-Purpose Register (GPR) array.
///
/// This module verifies reads and writes of the 32 integer registers and
/// the hardwired zero in `x0`.
pub mod gpr;
