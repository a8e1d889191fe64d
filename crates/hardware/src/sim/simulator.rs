//! Simulator: owns the architectural state and drives the fetch/decode/execute loop.
//!
//! Each cycle fetches the word at the PC, decodes it against the current register file,
//! executes it, and hands one [`TraceRecord`] to the trace sink. The run ends when an
//! `ebreak` retires or when the optional cycle limit is reached; the limit is only checked
//! between cycles.

use std::path::Path;

use crate::common::error::SimError;
use crate::common::reg::RegisterFile;
use crate::config::SimConfig;
use crate::core::execution::Control;
use crate::core::memory::SparseMemory;
use crate::isa::abi;
use crate::isa::decode::decode;
use crate::sim::loader;
use crate::sim::trace::{TraceRecord, TraceSink};

/// How a call to [`Simulator::run`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// An `ebreak` retired after `cycles` instructions, itself included.
    Halted {
        /// Instructions executed.
        cycles: u64,
    },
    /// The configured cycle limit stopped the run before a halt.
    CycleLimit {
        /// Instructions executed.
        cycles: u64,
    },
}

impl RunOutcome {
    /// Instructions executed by the run.
    pub const fn cycles(self) -> u64 {
        match self {
            Self::Halted { cycles } | Self::CycleLimit { cycles } => cycles,
        }
    }
}

/// Top-level simulator: register file, memory, and the execution log sink.
#[derive(Debug)]
pub struct Simulator<S: TraceSink> {
    regs: RegisterFile,
    mem: SparseMemory,
    sink: S,
    cycles: u64,
    max_cycles: Option<u64>,
    trace: bool,
}

impl<S: TraceSink> Simulator<S> {
    /// Creates a simulator with empty memory and registers set up from `config`.
    pub fn new(config: &SimConfig, sink: S) -> Self {
        let mut regs = RegisterFile::with_pc(config.entry_pc());
        if let Some(sp) = config.initial_sp {
            regs.set(abi::REG_SP, sp as i32);
        }
        Self {
            regs,
            mem: SparseMemory::with_fill(config.memory_fill),
            sink,
            cycles: 0,
            max_cycles: config.max_cycles,
            trace: config.trace_instructions,
        }
    }

    /// Creates a simulator and loads the image at `path` at the configured load offset.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Load`] if the image cannot be read.
    pub fn from_image(path: &Path, config: &SimConfig, sink: S) -> Result<Self, SimError> {
        let mut sim = Self::new(config, sink);
        let _ = loader::load_image(&mut sim.mem, path, config.load_offset)?;
        Ok(sim)
    }

    /// Copies `data` into memory at `offset`.
    pub fn load_bytes(&mut self, data: &[u8], offset: u32) {
        self.mem.load_binary_at(data, offset);
    }

    /// Architectural registers.
    pub const fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// Mutable access to the registers, e.g. to preset arguments.
    pub const fn regs_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// Simulated memory.
    pub const fn mem(&self) -> &SparseMemory {
        &self.mem
    }

    /// Mutable access to memory.
    pub const fn mem_mut(&mut self) -> &mut SparseMemory {
        &mut self.mem
    }

    /// The trace sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the simulator and returns its trace sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Instructions executed so far.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Executes exactly one instruction.
    ///
    /// # Returns
    ///
    /// `Ok(false)` once the halt instruction has executed, `Ok(true)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] if the fetched word is not a valid instruction (no
    /// state changes and nothing is logged), or [`SimError::Trace`] if the log write fails.
    pub fn step(&mut self) -> Result<bool, SimError> {
        let pc = self.regs.pc();
        let raw = self.mem.load_word(pc);
        let inst = decode(raw, &self.regs).map_err(|source| SimError::Decode { pc, source })?;

        let control = inst.execute(&mut self.regs, &mut self.mem);
        self.cycles += 1;

        let rec = TraceRecord::new(&inst, &self.regs);
        if self.trace {
            tracing::debug!("{rec}");
        }
        self.sink.record(&rec)?;

        match control {
            Control::Continue => Ok(true),
            Control::Halt => {
                tracing::info!(pc = format_args!("{pc:#010x}"), cycles = self.cycles, "halted");
                Ok(false)
            }
        }
    }

    /// Runs until a halt or the cycle limit, then flushes the trace sink.
    ///
    /// The sink is flushed on every exit path, including a failed step, so records of the
    /// instructions that did execute reach the log.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`Simulator::step`], otherwise any error from
    /// the final flush. A flush failure after a failed step is logged and the step error
    /// is returned.
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        let result = self.run_until_stop();
        let flushed = self.sink.flush();
        match (result, flushed) {
            (Ok(outcome), flushed) => flushed.map(|()| outcome),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(flush_err)) => {
                tracing::warn!("trace flush after failed run: {flush_err}");
                Err(e)
            }
        }
    }

    fn run_until_stop(&mut self) -> Result<RunOutcome, SimError> {
        loop {
            if self.max_cycles.is_some_and(|max| self.cycles >= max) {
                tracing::warn!(
                    cycles = self.cycles,
                    pc = format_args!("{:#010x}", self.regs.pc()),
                    "cycle limit reached before halt"
                );
                return Ok(RunOutcome::CycleLimit {
                    cycles: self.cycles,
                });
            }
            if !self.step()? {
                return Ok(RunOutcome::Halted {
                    cycles: self.cycles,
                });
            }
        }
    }
}
