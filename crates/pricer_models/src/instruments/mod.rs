//! European option contract definitions.
//!
//! This module provides the value types every pricing entry point consumes:
//! - [`ContractParameters`]: the five market/contract scalars `S`, `K`, `T`, `r`, `v`
//! - [`OptionType`]: Call or Put, selecting the closed-form branch and the payoff
//! - [`InstrumentError`]: validation failures raised while building them
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{ContractParameters, OptionType};
//!
//! let params = ContractParameters::new(100.0_f64, 95.0, 0.5, 0.03, 0.25).unwrap();
//! let put: OptionType = "put".parse().unwrap();
//!
//! assert_eq!(put.payoff(90.0, params.strike()), 5.0);
//! ```

mod error;
mod option_type;
mod params;

pub use error::InstrumentError;
pub use option_type::OptionType;
pub use params::ContractParameters;
