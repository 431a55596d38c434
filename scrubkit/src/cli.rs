// scrubkit/src/cli.rs
//! This file defines the command-line interface for the scrubkit binary,
//! including all available commands and their arguments.

use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "scrubkit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scrub free-form text through chainable translations",
    long_about = "Scrubkit drives text through a configurable sequence of transformations: \
per-character substitution, whole-word dictionary substitution, and pattern-based \
replacement against an extensible library of named patterns. Pipelines can be kept \
in a declarative YAML plan and reapplied to any input.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all informational messages.
    #[arg(long, short = 'q', global = true, help = "Suppress all informational messages.")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `scrubkit` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs a YAML scrub plan against an input file or stdin.
    #[command(about = "Runs a YAML scrub plan against an input file or stdin.")]
    Run(RunCommand),

    /// Applies a single named or inline pattern to an input file or stdin.
    #[command(about = "Applies a single named or inline pattern to an input file or stdin.")]
    Apply(ApplyCommand),

    /// Lists the built-in named pattern library.
    #[command(about = "Lists the built-in named pattern library.")]
    Patterns,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Path to the YAML scrub plan.
    #[arg(long, short = 'p', value_name = "FILE", help = "Path to the YAML scrub plan.")]
    pub plan: PathBuf,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write scrubbed output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `apply` command.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["named", "pattern"])))]
pub struct ApplyCommand {
    /// Name of a built-in library pattern to apply.
    #[arg(long, short = 'n', value_name = "NAME", help = "Name of a built-in library pattern to apply.")]
    pub named: Option<String>,

    /// Inline pattern to apply.
    #[arg(long, short = 'e', value_name = "REGEX", help = "Inline pattern to apply.")]
    pub pattern: Option<String>,

    /// Replacement text for each match (default: remove matches).
    #[arg(long, short = 'r', value_name = "TEXT", default_value = "", help = "Replacement text for each match (default: remove matches).")]
    pub replacement: String,

    /// Match case-insensitively.
    #[arg(long, help = "Match case-insensitively.")]
    pub ignore_case: bool,

    /// Match timeout in seconds (non-positive values fall back to the default).
    #[arg(long, value_name = "SECS", help = "Match timeout in seconds.")]
    pub timeout_secs: Option<f64>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write scrubbed output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a file instead of stdout.")]
    pub output: Option<PathBuf>,
}
