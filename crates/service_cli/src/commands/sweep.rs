//! Sweep command implementation
//!
//! Recomputes price and Greeks across a range of one input.

use clap::Args;
use pricer_models::instruments::{ContractParameters, OptionType};
use pricer_risk::scenarios::{SensitivitySweeper, SweepResult, SweepSpecification, SweepVariable};
use serde::Serialize;
use tracing::{debug, info};

use super::MarketArgs;
use crate::config::Settings;
use crate::output::{fixed, to_json, OutputFormat, Table};
use crate::Result;

/// Arguments of the `sweep` command
#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    /// Variable to sweep (S, K, T, r, v)
    #[arg(long)]
    pub variable: SweepVariable,

    /// Start of the range (defaults to the variable's default range)
    #[arg(long)]
    pub from: Option<f64>,

    /// End of the range (defaults to the variable's default range)
    #[arg(long)]
    pub to: Option<f64>,

    /// Number of points
    #[arg(short = 'n', long)]
    pub points: Option<usize>,

    #[command(flatten)]
    pub market: MarketArgs,
}

/// Sweep output with the inputs it was run against
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub label: &'static str,
    pub option_type: OptionType,
    pub base: ContractParameters<f64>,
    pub result: SweepResult<f64>,
}

/// Build the report without printing it
pub fn report(args: &SweepArgs, settings: &Settings) -> Result<SweepReport> {
    let (base, option_type) = args.market.resolve_with(settings)?;
    let (default_from, default_to) = args.variable.default_range();
    let from = args.from.unwrap_or(default_from);
    let to = args.to.unwrap_or(default_to);
    let points = args.points.unwrap_or(settings.sweep.num_points);

    debug!(variable = %args.variable, from, to, points, "Building sweep");
    let spec = SweepSpecification::with_range(args.variable, base, from, to, points)?;
    let result = SensitivitySweeper::sweep(&spec, option_type)?;

    Ok(SweepReport {
        label: args.variable.label(),
        option_type,
        base,
        result,
    })
}

/// Render a report
pub fn render(report: &SweepReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Table => {
            let r = &report.result;
            let mut table =
                Table::new([report.label, "Price", "Delta", "Gamma", "Theta", "Vega", "Rho"]);
            for i in 0..r.len() {
                table.push_row([
                    fixed(r.values[i], 4),
                    fixed(r.prices[i], 4),
                    fixed(r.delta[i], 4),
                    fixed(r.gamma[i], 6),
                    fixed(r.theta[i], 4),
                    fixed(r.vega[i], 4),
                    fixed(r.rho[i], 4),
                ]);
            }
            Ok(table.render())
        }
    }
}

/// Run the sweep command
pub fn run(args: &SweepArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let report = report(args, settings)?;
    info!(points = report.result.len(), "{} sweep complete", report.label);
    println!("{}", render(&report, format)?);
    Ok(())
}
