//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! Monte Carlo estimation of European option prices under risk-neutral
//! geometric Brownian motion.
//!
//! ## Layer 3 Role
//!
//! - [`rng`]: seeded pseudo-random streams built on `rand`/`rand_distr`
//! - [`mc`]: the antithetic terminal-price estimator and the two-point
//!   path diagnostic
//!
//! Layer 3 consumes [`ContractParameters`](pricer_models::instruments::ContractParameters)
//! and [`OptionType`](pricer_models::instruments::OptionType) from Layer 2 but
//! never calls the closed-form model; agreement with Black-Scholes is checked
//! only in tests.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{ContractParameters, OptionType};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, SimulationRequest};
//!
//! let params = ContractParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let request = SimulationRequest::new(params, OptionType::Call, 20_000).unwrap();
//!
//! let pricer = MonteCarloPricer::new(MonteCarloConfig::default());
//! let first = pricer.simulate(&request);
//! let second = pricer.simulate(&request);
//!
//! // Seeded per call: identical inputs, identical outputs
//! assert_eq!(first.price, second.price);
//! assert!((first.price - 10.45).abs() < 0.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

pub use mc::{MonteCarloConfig, MonteCarloPricer, PricePath, SimulationRequest, SimulationResult};
