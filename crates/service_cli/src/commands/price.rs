//! Price command implementation
//!
//! Prices a European option in closed form and reports the five Greeks.

use clap::Args;
use pricer_models::analytical::{self, BlackScholes, Greeks};
use pricer_models::instruments::{ContractParameters, OptionType};
use serde::Serialize;
use tracing::{debug, info};

use super::MarketArgs;
use crate::config::Settings;
use crate::output::{fixed, to_json, OutputFormat, Table};
use crate::Result;

/// Arguments of the `price` command
#[derive(Args, Debug, Clone, Default)]
pub struct PriceArgs {
    #[command(flatten)]
    pub market: MarketArgs,
}

/// Closed-form price and Greeks
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub option_type: OptionType,
    pub params: ContractParameters<f64>,
    pub d1: f64,
    pub d2: f64,
    pub price: f64,
    pub greeks: Greeks<f64>,
}

/// Build the report without printing it
pub fn report(args: &PriceArgs, settings: &Settings) -> Result<PriceReport> {
    let (params, option_type) = args.market.resolve_with(settings)?;
    debug!(?params, %option_type, "Pricing in closed form");

    let model = BlackScholes::new(params);
    Ok(PriceReport {
        option_type,
        params,
        d1: model.d1(),
        d2: model.d2(),
        price: analytical::price(&params, option_type)?,
        greeks: analytical::greeks(&params, option_type)?,
    })
}

/// Render a report
pub fn render(report: &PriceReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Table => {
            let p = &report.params;
            let g = &report.greeks;
            let mut table = Table::new(["Metric", "Value"]);
            table.push_row(["Option type".to_string(), report.option_type.to_string()]);
            table.push_row(["Spot (S)".to_string(), fixed(p.spot(), 4)]);
            table.push_row(["Strike (K)".to_string(), fixed(p.strike(), 4)]);
            table.push_row(["Expiry (T)".to_string(), fixed(p.expiry(), 4)]);
            table.push_row(["Rate (r)".to_string(), fixed(p.rate(), 4)]);
            table.push_row(["Volatility (v)".to_string(), fixed(p.volatility(), 4)]);
            table.push_row(["d1".to_string(), fixed(report.d1, 6)]);
            table.push_row(["d2".to_string(), fixed(report.d2, 6)]);
            table.push_row(["Price".to_string(), fixed(report.price, 4)]);
            table.push_row(["Delta".to_string(), fixed(g.delta, 4)]);
            table.push_row(["Gamma".to_string(), fixed(g.gamma, 4)]);
            table.push_row(["Theta".to_string(), fixed(g.theta, 4)]);
            table.push_row(["Vega".to_string(), fixed(g.vega, 4)]);
            table.push_row(["Rho".to_string(), fixed(g.rho, 4)]);
            Ok(table.render())
        }
    }
}

/// Run the price command
pub fn run(args: &PriceArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let report = report(args, settings)?;
    info!(price = report.price, "Pricing complete");
    println!("{}", render(&report, format)?);
    Ok(())
}
