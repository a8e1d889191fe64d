//! RISC-V architecture-specific components.
//!
//! The simulated hart has no CSRs, floating-point state or privilege modes; its only
//! architectural storage besides memory is the integer register file.

/// General-Purpose Register file implementation.
pub mod gpr;
