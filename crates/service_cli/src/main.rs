//! optionlab - European option analytics from the command line
//!
//! # Commands
//!
//! - `optionlab price` - Black-Scholes price and Greeks
//! - `optionlab sweep --variable <S|K|T|r|v>` - Price and Greeks across a range of one input
//! - `optionlab simulate` - Antithetic Monte Carlo estimate against the closed form
//! - `optionlab paths` - Two-point diagnostic price paths
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate resolves configuration, then calls
//! into `pricer_models`, `pricer_risk` and `pricer_pricing`. Logs go to
//! stderr so that JSON output on stdout stays machine-readable.

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use crate::config::Settings;
use crate::output::OutputFormat;

/// European option analytics CLI
#[derive(Parser)]
#[command(name = "optionlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "optionlab.toml")]
    config: String,

    /// Output format (overrides `[general] format`)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an option and compute its Greeks
    Price(commands::price::PriceArgs),

    /// Sweep one input and recompute price and Greeks
    Sweep(commands::sweep::SweepArgs),

    /// Estimate the price by Monte Carlo simulation
    Simulate(commands::simulate::SimulateArgs),

    /// Print diagnostic (initial, terminal) price paths
    Paths(commands::paths::PathsArgs),
}

fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    init_tracing(cli.verbose, &settings.general.log_level);
    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config, ?settings, "Settings loaded");

    let format = cli.format.unwrap_or(settings.general.format);

    match &cli.command {
        Commands::Price(args) => commands::price::run(args, &settings, format),
        Commands::Sweep(args) => commands::sweep::run(args, &settings, format),
        Commands::Simulate(args) => commands::simulate::run(args, &settings, format),
        Commands::Paths(args) => commands::paths::run(args, &settings, format),
    }
}
