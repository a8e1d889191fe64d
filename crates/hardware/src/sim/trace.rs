//! Execution Log.
//!
//! Every executed instruction produces one [`TraceRecord`], rendered as a single line:
//!
//! ```text
//! PC=00000008 [002081b3] x03=0000001e x01=0000000a x02=00000014 add     gp, ra, sp
//! ```
//!
//! The `rd` value is read after execution; the `rs1` / `rs2` values come from the
//! decode-time snapshot. Register fields are the raw `[11:7]`, `[19:15]` and `[24:20]`
//! bit ranges regardless of format. Records are handed to a [`TraceSink`].

use std::fmt;
use std::io::Write;

use crate::common::error::SimError;
use crate::common::reg::RegisterFile;
use crate::isa::disasm;
use crate::isa::instruction::{Instruction, InstructionBits};

/// One executed instruction, ready to be rendered as a log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub raw: u32,
    /// Index in the `rd` field.
    pub rd: usize,
    /// Value of `rd` after execution.
    pub rd_val: u32,
    /// Index in the `rs1` field.
    pub rs1: usize,
    /// Value of `rs1` before execution.
    pub rs1_val: u32,
    /// Index in the `rs2` field.
    pub rs2: usize,
    /// Value of `rs2` before execution.
    pub rs2_val: u32,
    /// Operation mnemonic.
    pub name: &'static str,
    /// Rendered operand list.
    pub operands: String,
}

impl TraceRecord {
    /// Builds the record for `inst` once it has executed against `regs`.
    pub fn new(inst: &Instruction, regs: &RegisterFile) -> Self {
        let snap = inst.snapshot;
        let rd = snap.raw.rd();
        Self {
            pc: snap.pc,
            raw: snap.raw,
            rd,
            rd_val: regs.get(rd) as u32,
            rs1: snap.raw.rs1(),
            rs1_val: snap.rs1_val as u32,
            rs2: snap.raw.rs2(),
            rs2_val: snap.rs2_val as u32,
            name: inst.name(),
            operands: disasm::operands(&inst.kind),
        }
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC={:08x} [{:08x}] x{:02}={:08x} x{:02}={:08x} x{:02}={:08x} {:<8}{}",
            self.pc,
            self.raw,
            self.rd,
            self.rd_val,
            self.rs1,
            self.rs1_val,
            self.rs2,
            self.rs2_val,
            self.name,
            self.operands
        )
    }
}

/// Destination for execution log records.
pub trait TraceSink {
    /// Accepts the record of one executed instruction.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Trace`] if the record cannot be written.
    fn record(&mut self, rec: &TraceRecord) -> Result<(), SimError>;

    /// Flushes buffered output. The default does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Trace`] if flushing fails.
    fn flush(&mut self) -> Result<(), SimError> {
        Ok(())
    }
}

/// Collects records in memory, mainly for tests.
impl TraceSink for Vec<TraceRecord> {
    fn record(&mut self, rec: &TraceRecord) -> Result<(), SimError> {
        self.push(rec.clone());
        Ok(())
    }
}

/// Writes one line per record to any [`Write`] implementation.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    out: W,
    lines: u64,
}

impl<W: Write> WriterSink<W> {
    /// Wraps `out`; callers should pass a buffered writer for files.
    pub const fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Number of lines written so far.
    pub const fn lines(&self) -> u64 {
        self.lines
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TraceSink for WriterSink<W> {
    fn record(&mut self, rec: &TraceRecord) -> Result<(), SimError> {
        writeln!(self.out, "{rec}")?;
        self.lines += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SimError> {
        self.out.flush()?;
        Ok(())
    }
}
