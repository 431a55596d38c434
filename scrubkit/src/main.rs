// scrubkit/src/main.rs
//! scrubkit entry point: parses the CLI and dispatches to a command.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Off
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    match &args.command {
        Commands::Run(cmd) => commands::run_plan(cmd),
        Commands::Apply(cmd) => commands::apply(cmd),
        Commands::Patterns => commands::list_patterns(),
    }
}
