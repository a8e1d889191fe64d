//! Builders for test inputs.

/// Fluent encoder for RV32IM instruction words.
pub mod instruction;
