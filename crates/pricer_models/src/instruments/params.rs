//! Market and contract parameters for a European option.
//!
//! This module provides [`ContractParameters`], the immutable set of five
//! scalars every pricing operation in the workspace consumes.

use num_traits::Float;

use super::error::InstrumentError;

/// Spot, strike, expiry, rate and volatility of a European option.
///
/// Construction validates the domain required by the Black-Scholes formulas:
/// `spot`, `strike`, `expiry` and `volatility` must be strictly positive and
/// finite, `rate` must be finite (zero and negative rates are allowed).
/// Fields are private, so a value of this type always satisfies the invariants.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::ContractParameters;
///
/// let params = ContractParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert_eq!(params.spot(), 100.0);
/// assert_eq!(params.volatility(), 0.2);
///
/// // Zero expiry would divide by zero in d1
/// assert!(ContractParameters::new(100.0_f64, 100.0, 0.0, 0.05, 0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContractParameters<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
}

#[inline]
fn strictly_positive<T: Float>(value: T) -> bool {
    value.is_finite() && value > T::zero()
}

#[inline]
fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl<T: Float> ContractParameters<T> {
    /// Creates new contract parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Time to expiry T in years (must be positive)
    /// * `rate` - Continuously compounded risk-free rate r (must be finite)
    /// * `volatility` - Annualised volatility v (must be positive)
    ///
    /// # Errors
    /// The first violated invariant, checked in argument order.
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
    ) -> Result<Self, InstrumentError> {
        if !strictly_positive(spot) {
            return Err(InstrumentError::InvalidSpot {
                spot: as_f64(spot),
            });
        }

        if !strictly_positive(strike) {
            return Err(InstrumentError::InvalidStrike {
                strike: as_f64(strike),
            });
        }

        if !strictly_positive(expiry) {
            return Err(InstrumentError::InvalidExpiry {
                expiry: as_f64(expiry),
            });
        }

        if !rate.is_finite() {
            return Err(InstrumentError::InvalidRate {
                rate: as_f64(rate),
            });
        }

        if !strictly_positive(volatility) {
            return Err(InstrumentError::InvalidVolatility {
                volatility: as_f64(volatility),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.expiry).exp()
    }

    /// Returns `true` when spot equals strike.
    #[inline]
    pub fn is_at_the_money(&self) -> bool {
        self.spot == self.strike
    }
}
