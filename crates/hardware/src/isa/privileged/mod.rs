//! System Instruction Definitions.
//!
//! The simulator models no privilege levels; the only system instruction it executes is
//! `EBREAK`, which halts the run.
//!
//! # Modules
//!
//! - `opcodes`: System opcode and the `EBREAK` encoding.

/// System instruction opcodes (EBREAK).
pub mod opcodes;
