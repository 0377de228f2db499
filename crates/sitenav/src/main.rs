//! sitenav CLI - Documentation navigation resolver.
//!
//! Provides commands for:
//! - `resolve`: Print the navigation context of page paths as JSON
//! - `check`: Validate the navigation taxonomy
//! - `outline`: Print sidebar pagination order

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, OutlineArgs, ResolveArgs};
use output::Output;

/// sitenav - Documentation navigation resolver.
#[derive(Parser)]
#[command(name = "sitenav", version, about)]
struct Cli {
    /// Enable verbose output (configuration and resolution logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve page paths to navigation contexts.
    Resolve(ResolveArgs),
    /// Check the navigation taxonomy for authoring mistakes.
    Check(CheckArgs),
    /// Print the pagination order of sidebar sections.
    Outline(OutlineArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Resolve(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Outline(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
