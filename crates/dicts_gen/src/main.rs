//! Operator tool for the sc2_dicts lookup tables.
//!
//! The sc2_dicts build script always works from the checked-in snapshots.
//! This tool runs the same pipeline against any dataset, local or remote,
//! and either writes the artifacts or checks existing ones for staleness.
//!
//! Usage:
//!   cargo run -p dicts_gen -- generate
//!   cargo run -p dicts_gen -- generate --table research --on-duplicate reject
//!   cargo run -p dicts_gen -- check --units-dataset https://example.com/unit_abilities.json
//!
//! Logging is controlled with `RUST_LOG` (default `info`).

mod cmd;
mod models;
mod source;
mod utils;

use clap::{Parser, Subcommand};
use cmd::{check, generate};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dicts_gen", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the tables and write them to the output directory
    Generate(generate::GenerateArgs),

    /// Render the tables and compare them with the files on disk
    Check(check::CheckArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate(args)) => generate::execute(args),
        Some(Commands::Check(args)) => check::execute(args),
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
