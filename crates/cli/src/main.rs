//! RV32IM instruction-set simulator CLI.
//!
//! This binary provides the entry points for running programs. It performs:
//! 1. **Single run:** Execute one raw binary image and write its execution log.
//! 2. **Batch run:** Execute every image in a directory, one log file per image, without
//!    letting one failing image stop the rest.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rv32sim_core::sim::{RunOutcome, WriterSink};
use rv32sim_core::{SimConfig, SimError, Simulator};

/// Exit status when a single run stops at the cycle limit instead of halting.
const EXIT_CYCLE_LIMIT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "RV32IM instruction-set simulator",
    long_about = "Run raw RV32IM binary images and write one log line per executed instruction.\n\nExamples:\n  sim run tests/bin/000.main.bin\n  sim run prog.bin --log prog.log --max-cycles 100000\n  sim batch tests/bin --out logs"
)]
struct Cli {
    /// Enable debug output (per-instruction tracing and final register dump).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by both subcommands.
#[derive(clap::Args, Debug)]
struct RunOptions {
    /// JSON configuration file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many executed instructions.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Address the image is loaded at (decimal or 0x-prefixed hex).
    #[arg(long, value_parser = parse_u32)]
    load_offset: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single image.
    Run {
        /// Raw binary image to execute.
        image: PathBuf,

        /// Write the execution log here instead of stdout.
        #[arg(long)]
        log: Option<PathBuf>,

        #[command(flatten)]
        opts: RunOptions,
    },

    /// Run every image in a directory, sorted by file name.
    Batch {
        /// Directory containing the images.
        dir: PathBuf,

        /// Directory for `<stem>.log` files (defaults to the image directory).
        #[arg(long)]
        out: Option<PathBuf>,

        /// File extension that marks an image.
        #[arg(long, default_value = "bin")]
        ext: String,

        #[command(flatten)]
        opts: RunOptions,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run { image, log, opts } => resolve_config(&opts, cli.verbose)
            .and_then(|config| cmd_run(&image, log.as_deref(), &config)),
        Commands::Batch {
            dir,
            out,
            ext,
            opts,
        } => resolve_config(&opts, cli.verbose)
            .and_then(|config| cmd_batch(&dir, out.as_deref(), &ext, &config))
            .map(|summary| summary.exit_code()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the global `fmt` subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Parses a `u32` given in decimal or with a `0x` prefix.
fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}

/// Loads the optional config file and applies flag overrides.
fn resolve_config(opts: &RunOptions, verbose: bool) -> Result<SimConfig, SimError> {
    let mut config = match &opts.config {
        Some(path) => SimConfig::from_json_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(max) = opts.max_cycles {
        config.max_cycles = Some(max);
    }
    if let Some(offset) = opts.load_offset {
        config.load_offset = offset;
    }
    config.trace_instructions |= verbose;
    Ok(config)
}

/// Runs one image to completion, writing its log to `log` or stdout.
fn cmd_run(image: &Path, log: Option<&Path>, config: &SimConfig) -> Result<ExitCode, SimError> {
    let outcome = match log {
        Some(path) => run_image(image, path, config)?,
        None => {
            let sink = WriterSink::new(BufWriter::new(io::stdout().lock()));
            let mut sim = Simulator::from_image(image, config, sink)?;
            let outcome = sim.run()?;
            sim.regs().dump();
            outcome
        }
    };
    Ok(match outcome {
        RunOutcome::Halted { .. } => ExitCode::SUCCESS,
        RunOutcome::CycleLimit { .. } => ExitCode::from(EXIT_CYCLE_LIMIT),
    })
}

/// Runs `image` with a fresh simulator and writes its log to `log_path`.
fn run_image(image: &Path, log_path: &Path, config: &SimConfig) -> Result<RunOutcome, SimError> {
    let sink = WriterSink::new(BufWriter::new(File::create(log_path)?));
    let mut sim = Simulator::from_image(image, config, sink)?;
    let outcome = sim.run()?;
    sim.regs().dump();
    tracing::debug!(log = %log_path.display(), lines = sim.sink().lines(), "log written");
    Ok(outcome)
}

/// Result of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BatchSummary {
    total: usize,
    failed: usize,
}

impl BatchSummary {
    fn exit_code(self) -> ExitCode {
        if self.failed == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Runs every image in `dir`; failures are logged and counted, not propagated.
fn cmd_batch(
    dir: &Path,
    out: Option<&Path>,
    ext: &str,
    config: &SimConfig,
) -> Result<BatchSummary, SimError> {
    let out_dir = out.unwrap_or(dir);
    fs::create_dir_all(out_dir)?;
    let images = discover_images(dir, ext).map_err(|source| SimError::Load {
        path: dir.to_path_buf(),
        source,
    })?;
    if images.is_empty() {
        tracing::warn!(dir = %dir.display(), ext, "no images found");
    }

    let mut failed = 0usize;
    for image in &images {
        let log_path = log_path_for(image, out_dir);
        match run_image(image, &log_path, config) {
            Ok(RunOutcome::Halted { cycles }) => {
                tracing::info!(image = %image.display(), cycles, "ok");
            }
            Ok(RunOutcome::CycleLimit { cycles }) => {
                failed += 1;
                tracing::error!(image = %image.display(), cycles, "did not halt");
            }
            Err(e) => {
                failed += 1;
                tracing::error!(image = %image.display(), "{e}");
            }
        }
    }

    tracing::info!(total = images.len(), failed, "batch finished");
    Ok(BatchSummary {
        total: images.len(),
        failed,
    })
}

/// Lists regular files in `dir` with extension `ext`, sorted by file name.
fn discover_images(dir: &Path, ext: &str) -> io::Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == ext) {
            images.push(path);
        }
    }
    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

/// `<out_dir>/<stem>.log` for an image path.
fn log_path_for(image: &Path, out_dir: &Path) -> PathBuf {
    let mut name = image
        .file_stem()
        .unwrap_or(image.as_os_str())
        .to_os_string();
    name.push(".log");
    out_dir.join(name)
}
