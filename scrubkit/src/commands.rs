// scrubkit/src/commands.rs
//! Command implementations for the scrubkit CLI.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Read, Write};
use std::path::Path;

use scrubkit_core::{Scrub, ScrubPlan, BUILTIN_PATTERNS};

use crate::cli::{ApplyCommand, RunCommand};

/// Runs a YAML scrub plan against the input.
pub fn run_plan(cmd: &RunCommand) -> Result<()> {
    let plan = ScrubPlan::load_from_file(&cmd.plan)?;
    let input = read_input(cmd.input_file.as_deref())?;

    let output = plan.run(&input)?;
    debug!(
        "plan applied; input {} bytes, output {} bytes",
        input.len(),
        output.len()
    );

    write_output(cmd.output.as_deref(), &output)
}

/// Applies a single named or inline pattern to the input.
pub fn apply(cmd: &ApplyCommand) -> Result<()> {
    let input = read_input(cmd.input_file.as_deref())?;

    let mut scrub = Scrub::new(input);
    scrub.ignore_case(cmd.ignore_case);
    if let Some(secs) = cmd.timeout_secs {
        scrub.set_match_timeout_secs(secs);
    }

    if let Some(name) = &cmd.named {
        scrub
            .apply_named(name, &cmd.replacement)
            .with_context(|| format!("Failed to apply named pattern '{name}'"))?;
    } else if let Some(pattern) = &cmd.pattern {
        scrub.set_pattern_list(vec![(pattern.clone(), cmd.replacement.clone())]);
        scrub
            .translate_patterns()
            .with_context(|| format!("Failed to apply pattern '{pattern}'"))?;
    }

    write_output(cmd.output.as_deref(), scrub.as_str())
}

/// Prints the built-in named pattern library.
pub fn list_patterns() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for (name, pattern) in BUILTIN_PATTERNS {
        writeln!(stdout, "{name}\t{pattern}").context("Failed to write to stdout")?;
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("reading input from: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read from stdin")?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    match path {
        Some(path) => {
            info!("writing output to: {}", path.display());
            std::fs::write(path, output)
                .with_context(|| format!("Failed to write output file {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("Failed to write to stdout")?;
            Ok(())
        }
    }
}
