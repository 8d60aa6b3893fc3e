//! Instrument error types.
//!
//! This module provides structured error handling for contract parameter
//! construction and option type parsing.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidSpot`: Spot price is non-positive or not finite
/// - `InvalidStrike`: Strike price is non-positive or not finite
/// - `InvalidExpiry`: Time to expiry is non-positive or not finite
/// - `InvalidVolatility`: Volatility is non-positive or not finite
/// - `InvalidRate`: Risk-free rate is not finite
/// - `UnknownOptionType`: Option type string is neither call nor put
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Non-finite risk-free rate.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Unrecognised option type.
    #[error("Unknown option type: '{value}' (expected 'call' or 'put')")]
    UnknownOptionType {
        /// The rejected input
        value: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::UnknownOptionType { .. } => {
                PricingError::InvalidArgument(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
