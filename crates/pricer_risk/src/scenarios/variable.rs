//! The contract input a sweep varies.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use pricer_models::instruments::{ContractParameters, InstrumentError};

use super::error::SweepError;

/// One of the five Black-Scholes inputs.
///
/// # Examples
/// ```
/// use pricer_risk::scenarios::SweepVariable;
///
/// assert_eq!("v".parse::<SweepVariable>().unwrap(), SweepVariable::Volatility);
/// assert_eq!("Strike Price".parse::<SweepVariable>().unwrap(), SweepVariable::Strike);
/// assert_eq!(SweepVariable::Expiry.label(), "Expiry Time");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SweepVariable {
    /// Spot price S
    Spot,
    /// Strike price K
    Strike,
    /// Time to expiry T
    Expiry,
    /// Risk-free rate r
    Rate,
    /// Volatility v
    Volatility,
}

impl SweepVariable {
    /// All variables in display order.
    pub const ALL: [SweepVariable; 5] = [
        SweepVariable::Spot,
        SweepVariable::Strike,
        SweepVariable::Expiry,
        SweepVariable::Rate,
        SweepVariable::Volatility,
    ];

    /// Short symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            SweepVariable::Spot => "S",
            SweepVariable::Strike => "K",
            SweepVariable::Expiry => "T",
            SweepVariable::Rate => "r",
            SweepVariable::Volatility => "v",
        }
    }

    /// User-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            SweepVariable::Spot => "Spot Price",
            SweepVariable::Strike => "Strike Price",
            SweepVariable::Expiry => "Expiry Time",
            SweepVariable::Rate => "Interest Rate",
            SweepVariable::Volatility => "Volatility",
        }
    }

    /// Default `(low, high)` bounds used when the caller supplies no values.
    ///
    /// These are defaults, not limits.
    pub fn default_range(&self) -> (f64, f64) {
        match self {
            SweepVariable::Spot | SweepVariable::Strike => (0.01, 1000.0),
            SweepVariable::Expiry => (0.01, 5.0),
            SweepVariable::Rate => (0.0, 1.0),
            SweepVariable::Volatility => (0.01, 1.0),
        }
    }

    /// Reads this variable's value from `params`.
    pub fn value_of<T: Float>(&self, params: &ContractParameters<T>) -> T {
        match self {
            SweepVariable::Spot => params.spot(),
            SweepVariable::Strike => params.strike(),
            SweepVariable::Expiry => params.expiry(),
            SweepVariable::Rate => params.rate(),
            SweepVariable::Volatility => params.volatility(),
        }
    }

    /// Returns `base` with this variable replaced by `value`.
    ///
    /// The result is re-validated, so a value outside the contract domain
    /// (for example a zero volatility) fails here.
    pub fn apply<T: Float>(
        &self,
        base: &ContractParameters<T>,
        value: T,
    ) -> Result<ContractParameters<T>, InstrumentError> {
        let (s, k, t, r, v) = (
            base.spot(),
            base.strike(),
            base.expiry(),
            base.rate(),
            base.volatility(),
        );
        match self {
            SweepVariable::Spot => ContractParameters::new(value, k, t, r, v),
            SweepVariable::Strike => ContractParameters::new(s, value, t, r, v),
            SweepVariable::Expiry => ContractParameters::new(s, k, value, r, v),
            SweepVariable::Rate => ContractParameters::new(s, k, t, value, v),
            SweepVariable::Volatility => ContractParameters::new(s, k, t, r, value),
        }
    }
}

impl FromStr for SweepVariable {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "spot" | "spot price" => Ok(SweepVariable::Spot),
            "k" | "strike" | "strike price" => Ok(SweepVariable::Strike),
            "t" | "expiry" | "expiry time" => Ok(SweepVariable::Expiry),
            "r" | "rate" | "interest rate" => Ok(SweepVariable::Rate),
            "v" | "vol" | "volatility" => Ok(SweepVariable::Volatility),
            _ => Err(SweepError::UnknownVariable(s.to_string())),
        }
    }
}

impl fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
