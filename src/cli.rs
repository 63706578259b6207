// src/cli.rs

//! CLI argument parsing using `clap`.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

/// Command-line arguments for `waveplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "waveplan",
    version,
    about = "Arrange dependent task records into worker-bounded execution waves.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the input task file.
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Maximum number of tasks the executor runs concurrently.
    #[arg(value_name = "MAX_WORKERS")]
    pub max_workers: NonZeroUsize,

    /// Path of the schedule file to write.
    #[arg(value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WAVEPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse and schedule, print the waves, but don't write the output file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Check the argument triple before the pipeline touches any file.
///
/// The worker budget is already guaranteed positive by its type; what's
/// left is input-file existence and output-directory existence.
pub fn validate(args: &CliArgs) -> Result<()> {
    if !args.input.is_file() {
        bail!("input file {:?} does not exist", args.input);
    }

    // A bare filename like "schedule.txt" has an empty parent; treat it as
    // the current working directory.
    let output_dir = match args.output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !output_dir.is_dir() {
        bail!("output directory {:?} does not exist", output_dir);
    }

    Ok(())
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
