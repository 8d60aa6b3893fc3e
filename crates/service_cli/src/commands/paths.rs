//! Paths command implementation
//!
//! Prints a handful of two-point `(initial, terminal)` price paths. These
//! come from a stream separate from `simulate`, so they are unseeded unless
//! a path seed is configured or passed.

use clap::Args;
use pricer_models::instruments::ContractParameters;
use pricer_pricing::mc::{MonteCarloPricer, PricePath, SimulationRequest};
use serde::Serialize;
use tracing::{debug, info};

use super::MarketArgs;
use crate::config::Settings;
use crate::output::{fixed, to_json, OutputFormat, Table};
use crate::Result;

/// Arguments of the `paths` command
#[derive(Args, Debug, Clone, Default)]
pub struct PathsArgs {
    /// Number of paths to display
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Seed of the diagnostic stream
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub market: MarketArgs,
}

/// Diagnostic paths
#[derive(Debug, Clone, Serialize)]
pub struct PathsReport {
    pub params: ContractParameters<f64>,
    pub seed: Option<u64>,
    pub paths: Vec<PricePath>,
}

/// Build the report without printing it
pub fn report(args: &PathsArgs, settings: &Settings) -> Result<PathsReport> {
    let (params, option_type) = args.market.resolve_with(settings)?;
    let n_paths = args.paths.unwrap_or(settings.monte_carlo.num_display_paths);
    let request = SimulationRequest::new(params, option_type, n_paths)?;

    let mut config = settings.monte_carlo.engine_config();
    if let Some(seed) = args.seed {
        config = config.with_path_seed(seed);
    }
    debug!(n_paths, path_seed = ?config.path_seed(), "Generating paths");

    Ok(PathsReport {
        params,
        seed: config.path_seed(),
        paths: MonteCarloPricer::new(config).generate_paths(&request),
    })
}

/// Render a report
pub fn render(report: &PathsReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Table => {
            let mut table = Table::new(["Path", "Initial", "Terminal"]);
            for (i, path) in report.paths.iter().enumerate() {
                table.push_row([
                    (i + 1).to_string(),
                    fixed(path.initial, 4),
                    fixed(path.terminal, 4),
                ]);
            }
            Ok(table.render())
        }
    }
}

/// Run the paths command
pub fn run(args: &PathsArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let report = report(args, settings)?;
    info!(paths = report.paths.len(), "Path generation complete");
    println!("{}", render(&report, format)?);
    Ok(())
}
