//! IZ CLI - Index Zero site configuration tool.
//!
//! Provides commands for:
//! - `show`: Print the effective configuration
//! - `check`: Validate the configuration and summarize it
//! - `hero`: Preview the rendered hero block

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, HeroArgs, ShowArgs};
use output::Output;

/// IZ - Index Zero site configuration.
#[derive(Parser)]
#[command(name = "iz", version, about)]
struct Cli {
    /// Enable verbose output (show config discovery logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration.
    Show(ShowArgs),
    /// Validate the configuration.
    Check(CheckArgs),
    /// Render the hero block to HTML.
    Hero(HeroArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG (ERROR only when unset)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Show(args) => args.execute(&output),
        Commands::Check(args) => args.execute(&output),
        Commands::Hero(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
