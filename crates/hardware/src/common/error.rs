//! Decode and simulation error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Decode errors:** Instruction words whose opcode or function codes select no operation.
//! 2. **Simulation errors:** Failures that end a run (decode faults, trace sink and image I/O).
//!
//! Architectural edge cases such as division by zero or oversized shift amounts are not
//! errors; they produce the results defined by the ALU.

use std::io;
use std::path::PathBuf;

/// Errors raised while turning a raw instruction word into an operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The opcode field `[6:0]` matches no instruction format.
    #[error("unknown opcode {opcode:#09b} in instruction {raw:#010x}")]
    UnknownOpcode {
        /// The offending instruction word.
        raw: u32,
        /// The extracted opcode field.
        opcode: u32,
    },

    /// The opcode is known but `funct3` / `funct7` select no operation for it.
    #[error(
        "unknown function code (funct3={funct3:#05b}, funct7={funct7:#09b}) for opcode {opcode:#09b} in instruction {raw:#010x}"
    )]
    UnknownFunctionCode {
        /// The offending instruction word.
        raw: u32,
        /// The extracted opcode field.
        opcode: u32,
        /// The extracted `funct3` field.
        funct3: u32,
        /// The extracted `funct7` field (upper immediate bits for I-type words).
        funct7: u32,
    },
}

impl DecodeError {
    /// Returns the instruction word that failed to decode.
    pub const fn raw(&self) -> u32 {
        match self {
            Self::UnknownOpcode { raw, .. } | Self::UnknownFunctionCode { raw, .. } => *raw,
        }
    }
}

/// Errors that terminate a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The fetched word could not be decoded.
    #[error("decode failed at pc={pc:#010x}: {source}")]
    Decode {
        /// Address the word was fetched from.
        pc: u32,
        /// Underlying decode failure.
        #[source]
        source: DecodeError,
    },

    /// The execution log could not be written.
    #[error("failed to write execution trace: {0}")]
    Trace(#[from] io::Error),

    /// A program image could not be read.
    #[error("could not read program image '{}': {source}", .path.display())]
    Load {
        /// Path of the image.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be read or parsed.
    #[error("invalid configuration '{}': {reason}", .path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Human-readable cause.
        reason: String,
    },
}
