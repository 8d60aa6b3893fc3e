//! Monte Carlo pricing of European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig   (primary seed, optional diagnostic seed)
//! ├── SimulationRequest  (contract, option type, path count)
//! ├── PricerRng          (created per call, never stored)
//! └── Orchestration
//!     ├── simulate()        antithetic terminal prices → discounted mean
//!     └── generate_paths()  independent (S, S_T) pairs for display
//! ```
//!
//! # Estimator
//!
//! For `n` standard normals `z` and their negations `-z`:
//!
//! ```text
//! S_T  = S · exp((r - σ²/2)T + σ√T · z)
//! S_T' = S · exp((r - σ²/2)T - σ√T · z)
//! V    = e^(-rT) · (mean(payoff(S_T)) + mean(payoff(S_T'))) / 2
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::{ContractParameters, OptionType};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, SimulationRequest};
//!
//! let params = ContractParameters::new(100.0, 110.0, 0.5, 0.03, 0.25).unwrap();
//! let request = SimulationRequest::new(params, OptionType::Put, 10_000).unwrap();
//!
//! let pricer = MonteCarloPricer::new(MonteCarloConfig::default().with_seed(7));
//! let result = pricer.simulate(&request);
//!
//! assert_eq!(result.terminal_prices.len(), 10_000);
//! println!("Price: {:.4} +/- {:.4}", result.price, result.confidence_95());
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod pricer;

pub use config::{MonteCarloConfig, DEFAULT_SEED, MAX_PATHS};
pub use error::ConfigError;
pub use paths::GbmParams;
pub use pricer::{
    DistributionSummary, MonteCarloPricer, PricePath, SimulationRequest, SimulationResult,
};
