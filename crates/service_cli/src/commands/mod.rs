//! CLI command implementations
//!
//! Each submodule implements a specific CLI command: it resolves its inputs
//! against [`Settings`], builds a serialisable report and renders it in the
//! requested [`OutputFormat`](crate::output::OutputFormat).

use clap::Args;
use pricer_models::instruments::{ContractParameters, OptionType};

use crate::config::{MarketConfig, Settings};
use crate::Result;

pub mod paths;
pub mod price;
pub mod simulate;
pub mod sweep;

/// Market parameter overrides shared by every command
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct MarketArgs {
    /// Spot price S
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike price K
    #[arg(long)]
    pub strike: Option<f64>,

    /// Time to expiry T in years
    #[arg(long)]
    pub expiry: Option<f64>,

    /// Risk-free rate r
    #[arg(long)]
    pub rate: Option<f64>,

    /// Volatility v
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Option type (call or put)
    #[arg(long)]
    pub option_type: Option<OptionType>,
}

impl MarketArgs {
    /// Merge the overrides onto the configured market and validate.
    pub fn resolve(&self, market: &MarketConfig) -> Result<(ContractParameters<f64>, OptionType)> {
        let merged = MarketConfig {
            spot: self.spot.unwrap_or(market.spot),
            strike: self.strike.unwrap_or(market.strike),
            expiry: self.expiry.unwrap_or(market.expiry),
            rate: self.rate.unwrap_or(market.rate),
            volatility: self.volatility.unwrap_or(market.volatility),
            option_type: market.option_type.clone(),
        };
        let params = merged.params()?;
        let option_type = match self.option_type {
            Some(option_type) => option_type,
            None => merged.option_type()?,
        };
        Ok((params, option_type))
    }

    /// Resolve against the market section of `settings`.
    pub fn resolve_with(&self, settings: &Settings) -> Result<(ContractParameters<f64>, OptionType)> {
        self.resolve(&settings.market)
    }
}
