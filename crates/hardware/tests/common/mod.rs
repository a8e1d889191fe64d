//! Shared test infrastructure.

/// Instruction word builders.
pub mod builder;
