//! Option type selection and vanilla payoffs.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::InstrumentError;

/// European option type.
///
/// Selects the closed-form branch in the analytical model and the payoff
/// applied to simulated terminal prices.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// assert_eq!(OptionType::Call.payoff(110.0_f64, 100.0), 10.0);
/// assert_eq!(OptionType::Put.payoff(110.0_f64, 100.0), 0.0);
///
/// assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Returns `true` for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Evaluates the exercise payoff at a terminal price.
    #[inline]
    pub fn payoff<T: Float>(&self, terminal: T, strike: T) -> T {
        let intrinsic = match self {
            OptionType::Call => terminal - strike,
            OptionType::Put => strike - terminal,
        };
        intrinsic.max(T::zero())
    }

    /// Lowercase name used for parsing and display.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(InstrumentError::UnknownOptionType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
