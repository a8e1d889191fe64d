//! Simulation driver and program loading.
//!
//! Provides the fetch/decode/execute loop, the execution log, and the loader that places
//! raw program images into memory.

/// Raw binary image loading.
pub mod loader;

/// Top-level simulator and run loop.
pub mod simulator;

/// Execution log records and sinks.
pub mod trace;

pub use self::simulator::{RunOutcome, Simulator};
pub use self::trace::{TraceRecord, TraceSink, WriterSink};
