//! saccr - SA-CCR Exposure at Default from the command line
//!
//! This is the operational entry point for the SA-CCR calculator.
//!
//! # Commands
//!
//! - `saccr ead --file <name-or-path>` - Compute EAD for a trade file and render the report
//! - `saccr check --file <name-or-path>` - Load a trade file and report hedging-set sizes
//! - `saccr params` - Print the effective parameters as TOML
//!
//! # Architecture
//!
//! As part of the **S**ervice layer in the A-I-P-S architecture, this crate
//! wires `adapter_loader` input into the `pricer_saccr` pipeline and renders
//! its report.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod render;

use config::{CliConfig, OutputFormat};
pub use error::{CliError, Result};

/// SA-CCR Exposure at Default calculator
#[derive(Parser)]
#[command(name = "saccr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "saccr.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute exposure at default for a trade file
    Ead {
        /// Data set name (resolved in the data directory) or path to a JSON trade file
        #[arg(short, long)]
        file: String,

        /// Output format (defaults to the configured format)
        #[arg(short = 't', long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a trade file and report hedging-set sizes
    Check {
        /// Data set name or path to a JSON trade file
        #[arg(short, long)]
        file: String,
    },

    /// Print the effective parameters as TOML
    Params,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(&cli.config)?;

    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Initialise tracing; reports go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config.display(), "Configuration loaded");

    match cli.command {
        Commands::Ead {
            file,
            format,
            output,
        } => commands::ead::run(&config, &file, format, output.as_deref()),
        Commands::Check { file } => commands::check::run(&config, &file),
        Commands::Params => commands::params::run(&config),
    }
}
