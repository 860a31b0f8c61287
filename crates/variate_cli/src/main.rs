//! Variate CLI - Random Variate Generation from the Command Line
//!
//! # Commands
//!
//! - `variate generate <family> -p NAME=VALUE ... -n <count>` - Print variates
//! - `variate summary <family> ...` - Compare sample and theoretical moments
//! - `variate histogram <family> ... [--bins B]` - Render a text histogram
//! - `variate check` - Show configuration and run a moment self-check
//!
//! Logs go to stderr so that stdout can be piped.

use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod params;

pub use error::{CliError, Result};

use commands::generate::OutputFormat;
use commands::SampleArgs;
use config::CliConfig;

/// Random variate generator
#[derive(Parser)]
#[command(name = "variate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "variate.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw variates and print them
    Generate {
        #[command(flatten)]
        sample: SampleArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Draw variates and compare sample moments with theoretical ones
    Summary {
        #[command(flatten)]
        sample: SampleArgs,
    },

    /// Draw variates and render a probability histogram
    Histogram {
        #[command(flatten)]
        sample: SampleArgs,

        /// Number of bins (defaults to the configured value)
        #[arg(short, long)]
        bins: Option<usize>,

        /// Chart title
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Check configuration and sampler health
    Check,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(Path::new(&cli.config))?.with_env_override()?;
    config.validate()?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };

    // Initialise tracing; RUST_LOG takes precedence over the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Generate { sample, format } => commands::generate::run(&sample, format, &config),
        Commands::Summary { sample } => commands::summary::run(&sample, &config),
        Commands::Histogram {
            sample,
            bins,
            title,
        } => commands::histogram::run(&sample, bins, title.as_deref(), &config),
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
