//! Core component tests.

/// General-purpose register array.
pub mod arch;
