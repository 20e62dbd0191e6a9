//! Kafka Connect reconciliation simulator
//!
//! Reads connector definitions from disk and prints what a deployment job
//! would create or update, without contacting a cluster.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use connect_core::LoaderOptions;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init()?;
    }

    execute_command(cli.command.unwrap_or_default())
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Simulate {
            dir,
            helm_placeholders,
        } => commands::run_simulate(&dir, LoaderOptions { helm_placeholders }),
        Commands::Validate { root } => commands::run_validate(&root),
    }
}
