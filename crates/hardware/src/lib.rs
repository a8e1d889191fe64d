//! RV32IM instruction-set simulator library.
//!
//! This crate implements a functional RISC-V RV32IM simulator with the following:
//! 1. **Common:** Fixed-width bit patterns, the register file, constants and errors.
//! 2. **Core:** Sparse memory, the integer ALU, and per-instruction execution.
//! 3. **ISA:** Field extraction, strict decoding and disassembly for RV32I/M plus `ebreak`.
//! 4. **Simulation:** Image loader, fetch/decode/execute loop, and the execution log.
//!
//! # Examples
//!
//! ```
//! use rv32sim_core::{SimConfig, Simulator, sim::RunOutcome, sim::TraceRecord};
//!
//! // addi x1, x0, 10 ; addi x2, x0, 20 ; add x3, x1, x2 ; ebreak
//! let program: [u32; 4] = [0x00a0_0093, 0x0140_0113, 0x0020_81b3, 0x0010_0073];
//! let image: Vec<u8> = program.iter().flat_map(|w| w.to_le_bytes()).collect();
//!
//! let mut sim = Simulator::new(&SimConfig::default(), Vec::<TraceRecord>::new());
//! sim.load_bytes(&image, 0);
//! assert_eq!(sim.run().unwrap(), RunOutcome::Halted { cycles: 4 });
//! assert_eq!(sim.regs().get(3), 30);
//! assert_eq!(sim.sink().len(), 4);
//! ```

/// Common types and constants (bit patterns, registers, errors).
pub mod common;
/// Simulator run configuration.
pub mod config;
/// Hart state and execution (registers, memory, ALU).
pub mod core;
/// Instruction set (decode, instruction, ABI, RV32I/M, ebreak).
pub mod isa;
/// Loader, simulation loop and execution log.
pub mod sim;

/// Run configuration; use `SimConfig::default()` or parse from JSON.
pub use crate::config::SimConfig;
/// Error returned by every fallible simulation operation.
pub use crate::common::error::SimError;
/// Main simulator type; owns registers, memory and the trace sink.
pub use crate::sim::Simulator;
