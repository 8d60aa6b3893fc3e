//! Monte Carlo pricing engine.
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Random number generation (via [`PricerRng`](crate::rng::PricerRng))
//! 2. Terminal prices for the draws and their antithetic negations
//! 3. Payoff evaluation and discounting
//!
//! The pricer holds configuration only. Each call builds its own generator,
//! so a shared `&MonteCarloPricer` can serve concurrent callers without any
//! of them observing another's random state.

use pricer_models::instruments::{ContractParameters, OptionType};

use super::config::{MonteCarloConfig, MAX_PATHS};
use super::error::ConfigError;
use super::paths::GbmParams;
use crate::rng::PricerRng;

/// A validated Monte Carlo request.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{ContractParameters, OptionType};
/// use pricer_pricing::mc::{ConfigError, SimulationRequest};
///
/// let params = ContractParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!(SimulationRequest::new(params, OptionType::Call, 1_000).is_ok());
/// assert_eq!(
///     SimulationRequest::new(params, OptionType::Call, 0).unwrap_err(),
///     ConfigError::InvalidPathCount(0)
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationRequest {
    params: ContractParameters<f64>,
    option_type: OptionType,
    n_paths: usize,
}

impl SimulationRequest {
    /// Creates a request.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPathCount` if `n_paths` is 0 or above [`MAX_PATHS`].
    pub fn new(
        params: ContractParameters<f64>,
        option_type: OptionType,
        n_paths: usize,
    ) -> Result<Self, ConfigError> {
        if n_paths == 0 || n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(n_paths));
        }
        Ok(Self {
            params,
            option_type,
            n_paths,
        })
    }

    /// Returns the contract parameters.
    #[inline]
    pub fn params(&self) -> &ContractParameters<f64> {
        &self.params
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }
}

/// Min/mean/max of a set of simulated prices.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistributionSummary {
    /// Smallest value.
    pub min: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Largest value.
    pub max: f64,
}

impl DistributionSummary {
    fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let (min, max, sum) = values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &v| (min.min(v), max.max(v), sum + v),
        );
        Some(Self {
            min,
            mean: sum / values.len() as f64,
            max,
        })
    }
}

/// Output of [`MonteCarloPricer::simulate`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationResult {
    /// Discounted antithetic estimate of the option price.
    pub price: f64,
    /// Standard error of the estimate, from the antithetic pair averages.
    pub std_error: f64,
    /// Terminal prices from the primary draws `z`.
    pub terminal_prices: Vec<f64>,
    /// Terminal prices from the antithetic draws `-z`, index-aligned.
    pub antithetic_terminal_prices: Vec<f64>,
    /// Seed of the primary stream that produced this result.
    pub seed: u64,
}

impl SimulationResult {
    /// Number of primary paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.terminal_prices.len()
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Summary of the primary terminal prices.
    pub fn terminal_summary(&self) -> Option<DistributionSummary> {
        DistributionSummary::of(&self.terminal_prices)
    }
}

/// Two-point diagnostic path: spot today and one simulated terminal price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricePath {
    /// Initial price (the contract spot).
    pub initial: f64,
    /// Simulated terminal price.
    pub terminal: f64,
}

/// Monte Carlo pricing engine.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{ContractParameters, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, SimulationRequest};
///
/// let params = ContractParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let request = SimulationRequest::new(params, OptionType::Call, 5).unwrap();
/// let pricer = MonteCarloPricer::new(MonteCarloConfig::default());
///
/// let paths = pricer.generate_paths(&request);
/// assert_eq!(paths.len(), 5);
/// assert!(paths.iter().all(|p| p.initial == 100.0 && p.terminal > 0.0));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    #[inline]
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices a European option with antithetic variates.
    ///
    /// The primary stream is seeded from the configuration on every call, so
    /// repeated calls with the same request return bit-identical results.
    pub fn simulate(&self, request: &SimulationRequest) -> SimulationResult {
        let n_paths = request.n_paths();
        let params = request.params();
        let option_type = request.option_type();
        let strike = params.strike();
        let gbm = GbmParams::from(params);

        let mut rng = PricerRng::from_seed(self.config.seed());
        let mut randoms = vec![0.0; n_paths];
        rng.fill_normal(&mut randoms);

        let terminal_prices = gbm.terminal_prices(&randoms);
        for z in randoms.iter_mut() {
            *z = -*z;
        }
        let antithetic_terminal_prices = gbm.terminal_prices(&randoms);

        let mut payoff_sum = 0.0;
        let mut antithetic_sum = 0.0;
        let mut pair_sum = 0.0;
        let mut pair_sum_sq = 0.0;
        for (&st, &st_anti) in terminal_prices.iter().zip(&antithetic_terminal_prices) {
            let payoff = option_type.payoff(st, strike);
            let payoff_anti = option_type.payoff(st_anti, strike);
            payoff_sum += payoff;
            antithetic_sum += payoff_anti;

            let pair = 0.5 * (payoff + payoff_anti);
            pair_sum += pair;
            pair_sum_sq += pair * pair;
        }

        let n = n_paths as f64;
        let discount_factor = params.discount_factor();
        let price = discount_factor * (payoff_sum / n + antithetic_sum / n) / 2.0;

        let std_error = if n_paths > 1 {
            let pair_mean = pair_sum / n;
            let variance = ((pair_sum_sq - n * pair_mean * pair_mean) / (n - 1.0)).max(0.0);
            discount_factor * (variance / n).sqrt()
        } else {
            0.0
        };

        SimulationResult {
            price,
            std_error,
            terminal_prices,
            antithetic_terminal_prices,
            seed: rng.seed(),
        }
    }

    /// Generates two-point paths for visualisation.
    ///
    /// Draws come from a stream independent of [`simulate`](Self::simulate):
    /// seeded with `config.path_seed()` when fixed, otherwise from entropy.
    /// No antithetic pairing is applied.
    pub fn generate_paths(&self, request: &SimulationRequest) -> Vec<PricePath> {
        let mut rng = match self.config.path_seed() {
            Some(seed) => PricerRng::from_seed(seed),
            None => PricerRng::from_entropy(),
        };
        Self::generate_paths_with(request, &mut rng)
    }

    /// Generates two-point paths drawing from the supplied generator.
    pub fn generate_paths_with(request: &SimulationRequest, rng: &mut PricerRng) -> Vec<PricePath> {
        let gbm = GbmParams::from(request.params());
        (0..request.n_paths())
            .map(|_| PricePath {
                initial: gbm.spot,
                terminal: gbm.terminal_price(rng.gen_normal()),
            })
            .collect()
    }
}
