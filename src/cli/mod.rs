//! Command-line interface for readme-outputs
//!
//! Provides `update`, `table` and `banner` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod args;
mod banner;
mod table;
mod update;
mod utils;

/// Describe a library's build outputs and keep the README output table in sync
#[derive(Parser)]
#[command(name = "readme-outputs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the output table between the README markers
    Update(update::UpdateArgs),

    /// Print the output table to stdout
    Table(table::TableArgs),

    /// Print the license banner prepended to each bundle
    Banner(banner::BannerArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Update(args) => update::run(args),
        Commands::Table(args) => table::run(args),
        Commands::Banner(args) => banner::run(args),
    }
}
