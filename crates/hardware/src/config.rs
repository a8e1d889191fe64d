//! Configuration system for the RV32IM simulator.
//!
//! This module defines the run configuration used to parameterize a simulation. It
//! provides:
//! 1. **Defaults:** Load address, fill byte, and tracing baseline.
//! 2. **Structure:** A flat [`SimConfig`] whose every field may be omitted.
//! 3. **Loading:** JSON parsing from a string or a file on disk.
//!
//! The CLI reads an optional JSON file and then applies its flag overrides on top.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::DEFAULT_MEMORY_FILL;
use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Address the program image is copied to (and the default start PC).
    pub const LOAD_OFFSET: u32 = 0x0000_0000;
}

/// Simulation run configuration.
///
/// All fields are optional in JSON; omitted fields take the values of
/// [`SimConfig::default`].
///
/// # Examples
///
/// ```
/// use rv32sim_core::config::SimConfig;
///
/// let json = r#"{
///     "load_offset": 4096,
///     "max_cycles": 10000,
///     "trace_instructions": true
/// }"#;
///
/// let config = SimConfig::from_json_str(json).unwrap();
/// assert_eq!(config.load_offset, 0x1000);
/// assert_eq!(config.entry_pc(), 0x1000);
/// assert_eq!(config.max_cycles, Some(10_000));
/// assert!(config.trace_instructions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// Address the image's first byte is stored at.
    #[serde(default = "SimConfig::default_load_offset")]
    pub load_offset: u32,

    /// Initial PC value (defaults to the load offset).
    #[serde(default)]
    pub start_pc: Option<u32>,

    /// Initial stack pointer written to `sp` before the first fetch, if any.
    #[serde(default)]
    pub initial_sp: Option<u32>,

    /// Stop after this many executed instructions. `None` runs until halt.
    #[serde(default)]
    pub max_cycles: Option<u64>,

    /// Byte returned for memory that was never written.
    #[serde(default = "SimConfig::default_memory_fill")]
    pub memory_fill: u8,

    /// Emit a `debug` event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

impl SimConfig {
    fn default_load_offset() -> u32 {
        defaults::LOAD_OFFSET
    }

    fn default_memory_fill() -> u8 {
        DEFAULT_MEMORY_FILL
    }

    /// Address of the first fetched instruction.
    pub fn entry_pc(&self) -> u32 {
        self.start_pc.unwrap_or(self.load_offset)
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the file cannot be read or does not parse.
    pub fn from_json_file(path: &Path) -> Result<Self, SimError> {
        let text = fs::read_to_string(path).map_err(|e| SimError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&text).map_err(|e| SimError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            load_offset: defaults::LOAD_OFFSET,
            start_pc: None,
            initial_sp: None,
            max_cycles: None,
            memory_fill: DEFAULT_MEMORY_FILL,
            trace_instructions: false,
        }
    }
}
