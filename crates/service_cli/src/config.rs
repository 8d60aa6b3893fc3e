//! CLI configuration loading
//!
//! Settings are layered, later sources overriding earlier ones:
//! 1. Built-in defaults
//! 2. The TOML file given by `--config` (optional)
//! 3. Environment variables prefixed with `OPTIONLAB_`, sections separated
//!    by `__` (e.g. `OPTIONLAB_MARKET__SPOT=105`)

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use pricer_models::instruments::{ContractParameters, OptionType};
use pricer_pricing::mc::{MonteCarloConfig, DEFAULT_SEED};
use pricer_risk::scenarios::DEFAULT_SWEEP_POINTS;
use serde::Deserialize;

use crate::output::OutputFormat;
use crate::Result;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "OPTIONLAB";

/// CLI configuration
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Default market and contract inputs
    #[serde(default)]
    pub market: MarketConfig,

    /// Monte Carlo settings
    #[serde(default)]
    pub monte_carlo: MonteCarloSettings,

    /// Sweep settings
    #[serde(default)]
    pub sweep: SweepConfig,
}

impl Settings {
    /// Load settings from `path` (if it exists) and the environment.
    pub fn load(path: &str) -> Result<Self> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(path).required(false))
                .add_source(
                    Environment::with_prefix(ENV_PREFIX)
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}

/// General CLI settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeneralConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: OutputFormat::default(),
        }
    }
}

/// Market and contract defaults
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MarketConfig {
    /// Spot price S
    #[serde(default = "default_spot")]
    pub spot: f64,
    /// Strike price K
    #[serde(default = "default_strike")]
    pub strike: f64,
    /// Time to expiry T in years
    #[serde(default = "default_expiry")]
    pub expiry: f64,
    /// Risk-free rate r
    #[serde(default = "default_rate")]
    pub rate: f64,
    /// Volatility v
    #[serde(default = "default_volatility")]
    pub volatility: f64,
    /// "call" or "put"
    #[serde(default = "default_option_type")]
    pub option_type: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            expiry: default_expiry(),
            rate: default_rate(),
            volatility: default_volatility(),
            option_type: default_option_type(),
        }
    }
}

impl MarketConfig {
    /// Validated contract parameters.
    pub fn params(&self) -> Result<ContractParameters<f64>> {
        Ok(ContractParameters::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
        )?)
    }

    /// Parsed option type.
    pub fn option_type(&self) -> Result<OptionType> {
        Ok(self.option_type.parse::<OptionType>()?)
    }
}

/// Monte Carlo settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MonteCarloSettings {
    /// Number of paths for `simulate`
    #[serde(default = "default_num_paths")]
    pub num_paths: usize,

    /// Seed of the pricing stream
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Seed of the diagnostic path stream (entropy when unset)
    #[serde(default)]
    pub path_seed: Option<u64>,

    /// Number of paths for `paths`
    #[serde(default = "default_num_display_paths")]
    pub num_display_paths: usize,
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        Self {
            num_paths: default_num_paths(),
            seed: default_seed(),
            path_seed: None,
            num_display_paths: default_num_display_paths(),
        }
    }
}

impl MonteCarloSettings {
    /// Engine configuration.
    pub fn engine_config(&self) -> MonteCarloConfig {
        let config = MonteCarloConfig::default().with_seed(self.seed);
        match self.path_seed {
            Some(seed) => config.with_path_seed(seed),
            None => config,
        }
    }
}

/// Sweep settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SweepConfig {
    /// Number of points when `--points` is not given
    #[serde(default = "default_num_points")]
    pub num_points: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            num_points: default_num_points(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_spot() -> f64 {
    300.0
}

fn default_strike() -> f64 {
    250.0
}

fn default_expiry() -> f64 {
    1.0
}

fn default_rate() -> f64 {
    0.03
}

fn default_volatility() -> f64 {
    0.15
}

fn default_option_type() -> String {
    "call".to_string()
}

fn default_num_paths() -> usize {
    10_000
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_num_display_paths() -> usize {
    10
}

fn default_num_points() -> usize {
    DEFAULT_SWEEP_POINTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(content: &str) -> Result<Settings> {
        Settings::from_builder(
            Config::builder().add_source(File::from_str(content, FileFormat::Toml)),
        )
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.general.log_level, "info");
        assert_eq!(settings.general.format, OutputFormat::Table);
        assert_eq!(settings.market.spot, 300.0);
        assert_eq!(settings.monte_carlo.seed, 42);
        assert_eq!(settings.monte_carlo.path_seed, None);
        assert_eq!(settings.sweep.num_points, 100);
    }

    #[test]
    fn test_empty_source_yields_defaults() {
        assert_eq!(from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_overrides() {
        let settings = from_toml(
            r#"
            [general]
            format = "json"

            [market]
            spot = 100.0
            option_type = "put"

            [monte_carlo]
            path_seed = 9
            "#,
        )
        .unwrap();

        assert_eq!(settings.general.format, OutputFormat::Json);
        assert_eq!(settings.market.spot, 100.0);
        assert_eq!(settings.market.strike, 250.0);
        assert_eq!(settings.market.option_type().unwrap(), OptionType::Put);
        assert_eq!(settings.monte_carlo.engine_config().path_seed(), Some(9));
        assert_eq!(settings.monte_carlo.engine_config().seed(), 42);
    }

    #[test]
    fn test_invalid_market_rejected_on_conversion() {
        let settings = from_toml("[market]\nvolatility = 0.0").unwrap();
        assert!(settings.market.params().is_err());
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let settings = Settings::load("does-not-exist-optionlab").unwrap();
        assert_eq!(settings.sweep.num_points, 100);
    }
}
