//! seedgen CLI - synthetic financial fixtures in one command

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{check, generate, logs};

/// seedgen - generate synthetic financial test fixtures
#[derive(Parser)]
#[command(name = "seedgen", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fixture files (default when no command is given)
    Generate {
        /// Random seed (overrides SEEDGEN_SEED and seedgen.json)
        #[arg(long)]
        seed: Option<u64>,
        /// Output directory (overrides SEEDGEN_OUTPUT_DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run health checks on previously generated fixtures
    Check {
        /// Fixture directory to check
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Show per-record details
        #[arg(long, short)]
        verbose: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => generate::run(None, None, false),
        Some(Commands::Generate { seed, output, json }) => generate::run(seed, output, json),
        Some(Commands::Check { output, verbose, json }) => check::run(output, verbose, json),
        Some(Commands::Logs { command }) => logs::run(command),
    }
}
