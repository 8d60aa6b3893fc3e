//! Error types for analytical pricing operations.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// The closed-form model does not guard its inputs beyond what
/// [`ContractParameters`](crate::instruments::ContractParameters) enforces.
/// Extreme but valid inputs can still overflow; the checked entry points
/// report that here instead of handing NaN or infinity to the caller.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::NonFiniteResult { quantity: "gamma", value: f64::NAN };
/// assert!(format!("{}", err).contains("gamma"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// A computed quantity is NaN or infinite.
    #[error("Non-finite {quantity}: {value}")]
    NonFiniteResult {
        /// Name of the offending output (price, delta, ...)
        quantity: &'static str,
        /// The computed value
        value: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::NumericalInstability(err.to_string())
    }
}
