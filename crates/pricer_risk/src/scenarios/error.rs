//! Sweep error types.

use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::InstrumentError;
use thiserror::Error;

/// Errors that can occur while building or executing a sensitivity sweep.
///
/// A sweep either succeeds for every value or fails as a whole; the point
/// variants carry the index of the first value that failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SweepError {
    /// The sweep has no values.
    #[error("Sweep values must not be empty")]
    EmptyValues,

    /// A swept value is NaN or infinite.
    #[error("Non-finite sweep value at index {index}: {value}")]
    NonFiniteValue {
        /// Position in the value sequence
        index: usize,
        /// The rejected value
        value: f64,
    },

    /// Sweep variable string not recognised.
    #[error("Unknown sweep variable: '{0}' (expected one of S, K, T, r, v)")]
    UnknownVariable(String),

    /// Substituting the value produced invalid contract parameters.
    #[error("Invalid parameters at sweep point {index}: {source}")]
    InvalidPoint {
        /// Position in the value sequence
        index: usize,
        /// Underlying validation failure
        #[source]
        source: InstrumentError,
    },

    /// The model produced a non-finite price or Greek.
    #[error("Pricing failed at sweep point {index}: {source}")]
    PricingFailed {
        /// Position in the value sequence
        index: usize,
        /// Underlying numerical failure
        #[source]
        source: AnalyticalError,
    },
}

impl From<SweepError> for PricingError {
    fn from(err: SweepError) -> Self {
        match err {
            SweepError::EmptyValues | SweepError::UnknownVariable(_) => {
                PricingError::InvalidArgument(err.to_string())
            }
            SweepError::NonFiniteValue { .. } | SweepError::InvalidPoint { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            SweepError::PricingFailed { .. } => PricingError::NumericalInstability(err.to_string()),
        }
    }
}
