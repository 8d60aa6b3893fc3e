//! Error types for structured error handling.
//!
//! `PricingError` is the common denominator for all pricing failures. Each
//! layer defines richer, module-specific errors and converts them into one
//! of these categories.

use std::fmt;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Market or contract data outside its domain
///   (non-positive spot, strike, expiry or volatility, non-finite rate)
/// - `InvalidArgument`: Malformed request (zero path count, empty sweep,
///   unknown option type or sweep variable)
/// - `NumericalInstability`: A computation produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid market data or contract parameters
    InvalidInput(String),

    /// Invalid request argument
    InvalidArgument(String),

    /// Numerical instability during computation
    NumericalInstability(String),
}

impl PricingError {
    /// Returns `true` when the caller can fix the failure by changing its inputs.
    ///
    /// Numerical instability is reported separately because it can occur for
    /// inputs that pass validation (e.g. overflow for extreme parameters).
    #[inline]
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            PricingError::InvalidInput(_) | PricingError::InvalidArgument(_)
        )
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput("Test error".to_string());
        assert_eq!(format!("{}", err), "Invalid input: Test error");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = PricingError::InvalidArgument("Unknown option type: straddle".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid argument: Unknown option type: straddle"
        );
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = PricingError::NumericalInstability("price = NaN".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: price = NaN");
    }

    #[test]
    fn test_caller_error_classification() {
        assert!(PricingError::InvalidInput(String::new()).is_caller_error());
        assert!(PricingError::InvalidArgument(String::new()).is_caller_error());
        assert!(!PricingError::NumericalInstability(String::new()).is_caller_error());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("Test".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidArgument("Test".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
