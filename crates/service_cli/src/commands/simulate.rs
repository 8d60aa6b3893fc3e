//! Simulate command implementation
//!
//! Estimates the option price by Monte Carlo and compares it with the
//! closed form.

use clap::Args;
use pricer_models::analytical;
use pricer_models::instruments::{ContractParameters, OptionType};
use pricer_pricing::mc::{DistributionSummary, MonteCarloPricer, SimulationRequest};
use serde::Serialize;
use tracing::{debug, info};

use super::MarketArgs;
use crate::config::Settings;
use crate::output::{fixed, to_json, OutputFormat, Table};
use crate::Result;

/// Arguments of the `simulate` command
#[derive(Args, Debug, Clone, Default)]
pub struct SimulateArgs {
    /// Number of Monte Carlo paths
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Seed of the pricing stream
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub market: MarketArgs,
}

/// Monte Carlo estimate alongside the closed-form price
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub option_type: OptionType,
    pub params: ContractParameters<f64>,
    pub n_paths: usize,
    pub seed: u64,
    pub price: f64,
    pub std_error: f64,
    pub confidence_95: f64,
    pub closed_form: f64,
    pub difference: f64,
    pub terminal_summary: Option<DistributionSummary>,
}

/// Build the report without printing it
pub fn report(args: &SimulateArgs, settings: &Settings) -> Result<SimulationReport> {
    let (params, option_type) = args.market.resolve_with(settings)?;
    let n_paths = args.paths.unwrap_or(settings.monte_carlo.num_paths);
    let request = SimulationRequest::new(params, option_type, n_paths)?;

    let mut config = settings.monte_carlo.engine_config();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    debug!(n_paths, seed = config.seed(), "Running Monte Carlo");

    let result = MonteCarloPricer::new(config).simulate(&request);
    let closed_form = analytical::price(&params, option_type)?;

    Ok(SimulationReport {
        option_type,
        params,
        n_paths: result.n_paths(),
        seed: result.seed,
        price: result.price,
        std_error: result.std_error,
        confidence_95: result.confidence_95(),
        closed_form,
        difference: result.price - closed_form,
        terminal_summary: result.terminal_summary(),
    })
}

/// Render a report
pub fn render(report: &SimulationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Table => {
            let mut table = Table::new(["Metric", "Value"]);
            table.push_row(["Option type".to_string(), report.option_type.to_string()]);
            table.push_row(["Paths".to_string(), report.n_paths.to_string()]);
            table.push_row(["Seed".to_string(), report.seed.to_string()]);
            table.push_row(["Monte Carlo price".to_string(), fixed(report.price, 4)]);
            table.push_row(["Standard error".to_string(), fixed(report.std_error, 4)]);
            table.push_row(["95% half-width".to_string(), fixed(report.confidence_95, 4)]);
            table.push_row(["Black-Scholes price".to_string(), fixed(report.closed_form, 4)]);
            table.push_row(["Difference".to_string(), fixed(report.difference, 4)]);
            if let Some(summary) = &report.terminal_summary {
                table.push_row(["Terminal min".to_string(), fixed(summary.min, 4)]);
                table.push_row(["Terminal mean".to_string(), fixed(summary.mean, 4)]);
                table.push_row(["Terminal max".to_string(), fixed(summary.max, 4)]);
            }
            Ok(table.render())
        }
    }
}

/// Run the simulate command
pub fn run(args: &SimulateArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let report = report(args, settings)?;
    info!(
        price = report.price,
        std_error = report.std_error,
        "Simulation complete"
    );
    println!("{}", render(&report, format)?);
    Ok(())
}
