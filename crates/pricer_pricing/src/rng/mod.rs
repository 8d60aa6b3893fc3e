//! # Random Number Generation Infrastructure
//!
//! Seeded pseudo-random streams for Monte Carlo simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every stream records the seed it was initialised
//!   with, including entropy-seeded ones, so any run can be replayed
//! - **Call-local state**: generators are created per simulation call and
//!   never shared process-wide
//! - **Efficiency**: batch operations fill caller-provided `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let normal_value = rng.gen_normal();
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//!
//! // An independent stream whose seed is still recoverable
//! let diagnostic = PricerRng::from_entropy();
//! let _replay = PricerRng::from_seed(diagnostic.seed());
//! # let _ = normal_value;
//! ```

mod prng;

pub use prng::PricerRng;
