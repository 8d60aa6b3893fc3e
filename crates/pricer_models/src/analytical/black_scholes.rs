//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Theta convention
//!
//! Theta is computed with the call expression
//! `-(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)` for both option types. The
//! textbook put theta instead adds `r·K·e^(-rT)·N(-d₂)`; the two differ by
//! `r·K·e^(-rT)`.

use num_traits::Float;

use super::distributions::{constant, norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::{ContractParameters, InstrumentError, OptionType};

/// First-order sensitivities plus gamma for one option.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::{ContractParameters, OptionType};
///
/// let params = ContractParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let greeks = BlackScholes::new(params).greeks(OptionType::Call);
///
/// assert!((greeks.delta - 0.6368).abs() < 1e-4);
/// assert!((greeks.vega - 37.52).abs() < 1e-2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// Time decay, per year
    pub theta: T,
    /// ∂V/∂σ, per unit of volatility
    pub vega: T,
    /// ∂V/∂r, per unit of rate
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// Returns the name and value of the first non-finite Greek, if any.
    pub fn first_non_finite(&self) -> Option<(&'static str, T)> {
        [
            ("delta", self.delta),
            ("gamma", self.gamma),
            ("theta", self.theta),
            ("vega", self.vega),
            ("rho", self.rho),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    }
}

/// Black-Scholes model for European option pricing.
///
/// Wraps a validated [`ContractParameters`]; every method is a pure function
/// of those parameters.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::from_parts(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call();
/// let put_price = bs.price_put();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    params: ContractParameters<T>,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a model for the given contract.
    #[inline]
    pub fn new(params: ContractParameters<T>) -> Self {
        Self { params }
    }

    /// Validates the five scalars and creates a model.
    ///
    /// # Errors
    /// Any [`InstrumentError`] raised by [`ContractParameters::new`].
    pub fn from_parts(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
    ) -> Result<Self, InstrumentError> {
        ContractParameters::new(spot, strike, expiry, rate, volatility).map(Self::new)
    }

    /// Returns the contract parameters.
    #[inline]
    pub fn params(&self) -> &ContractParameters<T> {
        &self.params
    }

    #[inline]
    fn vol_sqrt_t(&self) -> T {
        self.params.volatility() * self.params.expiry().sqrt()
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> T {
        let p = &self.params;
        let half = constant::<T>(0.5);

        let log_moneyness = (p.spot() / p.strike()).ln();
        let drift = (p.rate() + half * p.volatility() * p.volatility()) * p.expiry();

        (log_moneyness + drift) / self.vol_sqrt_t()
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> T {
        self.d1() - self.vol_sqrt_t()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self) -> T {
        let p = &self.params;
        p.spot() * norm_cdf(self.d1()) - p.strike() * p.discount_factor() * norm_cdf(self.d2())
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self) -> T {
        let p = &self.params;
        p.strike() * p.discount_factor() * norm_cdf(-self.d2()) - p.spot() * norm_cdf(-self.d1())
    }

    /// Computes the option price for the given type.
    #[inline]
    pub fn price(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.price_call(),
            OptionType::Put => self.price_put(),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, option_type: OptionType) -> T {
        let n_d1 = norm_cdf(self.d1());
        match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - T::one(),
        }
    }

    /// Computes Gamma (∂²V/∂S²), identical for calls and puts.
    ///
    /// Gamma = φ(d₁) / (S·σ·√T)
    #[inline]
    pub fn gamma(&self) -> T {
        norm_pdf(self.d1()) / (self.params.spot() * self.vol_sqrt_t())
    }

    /// Computes Vega (∂V/∂σ), identical for calls and puts.
    ///
    /// Vega = S·√T·φ(d₁)
    #[inline]
    pub fn vega(&self) -> T {
        self.params.spot() * self.params.expiry().sqrt() * norm_pdf(self.d1())
    }

    /// Computes Theta.
    ///
    /// Theta = -(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂) for both types; see
    /// the module documentation for the put convention. The `option_type`
    /// argument is kept so call sites read the same as for the other Greeks.
    #[inline]
    pub fn theta(&self, _option_type: OptionType) -> T {
        let p = &self.params;
        let two = constant::<T>(2.0);

        let decay = -(p.spot() * norm_pdf(self.d1()) * p.volatility()) / (two * p.expiry().sqrt());
        decay - p.rate() * p.strike() * p.discount_factor() * norm_cdf(self.d2())
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, option_type: OptionType) -> T {
        let p = &self.params;
        let scale = p.strike() * p.expiry() * p.discount_factor();
        match option_type {
            OptionType::Call => scale * norm_cdf(self.d2()),
            OptionType::Put => -scale * norm_cdf(-self.d2()),
        }
    }

    /// Computes all five Greeks.
    pub fn greeks(&self, option_type: OptionType) -> Greeks<T> {
        Greeks {
            delta: self.delta(option_type),
            gamma: self.gamma(),
            theta: self.theta(option_type),
            vega: self.vega(),
            rho: self.rho(option_type),
        }
    }
}

/// Prices an option, surfacing a non-finite result as an error.
///
/// # Errors
/// `AnalyticalError::NonFiniteResult` if the price is NaN or infinite.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::{ContractParameters, OptionType};
///
/// let params = ContractParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let put = price(&params, OptionType::Put).unwrap();
/// assert!((put - 5.5735).abs() < 1e-3);
/// ```
pub fn price<T: Float>(
    params: &ContractParameters<T>,
    option_type: OptionType,
) -> Result<T, AnalyticalError> {
    let value = BlackScholes::new(*params).price(option_type);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticalError::NonFiniteResult {
            quantity: "price",
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}

/// Computes the Greeks of an option, surfacing any non-finite value as an error.
///
/// # Errors
/// `AnalyticalError::NonFiniteResult` naming the first non-finite Greek.
pub fn greeks<T: Float>(
    params: &ContractParameters<T>,
    option_type: OptionType,
) -> Result<Greeks<T>, AnalyticalError> {
    let result = BlackScholes::new(*params).greeks(option_type);
    match result.first_non_finite() {
        None => Ok(result),
        Some((quantity, value)) => Err(AnalyticalError::NonFiniteResult {
            quantity,
            value: value.to_f64().unwrap_or(f64::NAN),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64) -> BlackScholes<f64> {
        BlackScholes::from_parts(spot, strike, expiry, rate, vol).unwrap()
    }

    fn reference() -> BlackScholes<f64> {
        model(100.0, 100.0, 1.0, 0.05, 0.2)
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2
        let bs = model(100.0, 100.0, 1.0, 0.0, 0.2);
        assert_relative_eq!(bs.d1(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(bs.d2(), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_reference() {
        let bs = reference();
        assert_relative_eq!(bs.d1(), 0.35, epsilon = 1e-12);
        assert_relative_eq!(bs.d2(), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = model(100.0, 105.0, 0.5, 0.05, 0.2);
        assert_relative_eq!(bs.d2(), bs.d1() - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_d1_sign_tracks_moneyness() {
        assert!(model(150.0, 100.0, 1.0, 0.05, 0.2).d1() > 1.0);
        assert!(model(50.0, 100.0, 1.0, 0.05, 0.2).d1() < -1.0);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        assert_relative_eq!(reference().price_call(), 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_put_price_reference_value() {
        assert_relative_eq!(reference().price_put(), 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_price_dispatches_on_option_type() {
        let bs = reference();
        assert_eq!(bs.price(OptionType::Call), bs.price_call());
        assert_eq!(bs.price(OptionType::Put), bs.price_put());
    }

    #[test]
    fn test_deep_itm_call_approaches_forward() {
        let bs = model(200.0, 100.0, 1.0, 0.05, 0.2);
        let forward = 200.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(bs.price_call(), forward, epsilon = 1e-3);
    }

    #[test]
    fn test_deep_otm_call_near_zero() {
        assert!(model(50.0, 100.0, 1.0, 0.05, 0.2).price_call() < 0.01);
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_put_call_parity_atm() {
        let bs = reference();
        let forward = 100.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(bs.price_call() - bs.price_put(), forward, epsilon = 1e-10);
    }

    #[test]
    fn test_put_call_parity_various_strikes_and_expiries() {
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            for expiry in [0.25, 0.5, 1.0, 2.0] {
                let bs = model(100.0, strike, expiry, 0.05, 0.2);
                let forward = 100.0 - strike * (-0.05 * expiry).exp();
                assert_relative_eq!(bs.price_call() - bs.price_put(), forward, epsilon = 1e-10);
            }
        }
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_call_greeks_reference_values() {
        let g = reference().greeks(OptionType::Call);
        assert_relative_eq!(g.delta, 0.6368, epsilon = 1e-2);
        assert_relative_eq!(g.gamma, 0.0188, epsilon = 1e-2);
        assert_relative_eq!(g.vega, 37.52, epsilon = 1e-2);
        assert_relative_eq!(g.theta, -6.414, epsilon = 1e-2);
        assert_relative_eq!(g.rho, 53.23, epsilon = 1e-2);
    }

    #[test]
    fn test_put_greeks_reference_values() {
        let g = reference().greeks(OptionType::Put);
        assert_relative_eq!(g.delta, -0.3632, epsilon = 1e-2);
        assert_relative_eq!(g.rho, -41.89, epsilon = 1e-2);
    }

    #[test]
    fn test_put_theta_uses_call_expression() {
        let bs = reference();
        assert_eq!(bs.theta(OptionType::Put), bs.theta(OptionType::Call));

        // Textbook put theta differs by r·K·e^(-rT)
        let textbook_put = bs.theta(OptionType::Call) + 0.05 * 100.0 * (-0.05_f64).exp();
        assert!((bs.theta(OptionType::Put) - textbook_put).abs() > 1.0);
    }

    #[test]
    fn test_delta_call_put_relationship() {
        let bs = reference();
        assert_relative_eq!(
            bs.delta(OptionType::Put),
            bs.delta(OptionType::Call) - 1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_gamma_maximum_near_atm() {
        let atm = model(100.0, 100.0, 1.0, 0.05, 0.2).gamma();
        assert!(atm >= model(100.0, 80.0, 1.0, 0.05, 0.2).gamma());
        assert!(atm >= model(100.0, 130.0, 1.0, 0.05, 0.2).gamma());
    }

    #[test]
    fn test_rho_signs() {
        let bs = reference();
        assert!(bs.rho(OptionType::Call) > 0.0);
        assert!(bs.rho(OptionType::Put) < 0.0);
    }

    // ==========================================================
    // Greeks vs Finite Difference Tests
    // ==========================================================

    #[test]
    fn test_delta_and_gamma_vs_finite_diff() {
        let h = 0.01;
        let mid = reference();
        let up = model(100.0 + h, 100.0, 1.0, 0.05, 0.2);
        let dn = model(100.0 - h, 100.0, 1.0, 0.05, 0.2);

        let fd_delta = (up.price_call() - dn.price_call()) / (2.0 * h);
        let fd_gamma = (up.price_call() - 2.0 * mid.price_call() + dn.price_call()) / (h * h);

        assert_relative_eq!(mid.delta(OptionType::Call), fd_delta, epsilon = 1e-6);
        assert_relative_eq!(mid.gamma(), fd_gamma, epsilon = 1e-5);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let h = 1e-4;
        let up = model(100.0, 100.0, 1.0, 0.05, 0.2 + h);
        let dn = model(100.0, 100.0, 1.0, 0.05, 0.2 - h);
        let fd_vega = (up.price_put() - dn.price_put()) / (2.0 * h);
        assert_relative_eq!(reference().vega(), fd_vega, epsilon = 1e-5);
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let h = 1e-5;
        let up = model(100.0, 100.0, 1.0, 0.05 + h, 0.2);
        let dn = model(100.0, 100.0, 1.0, 0.05 - h, 0.2);
        let fd_call = (up.price_call() - dn.price_call()) / (2.0 * h);
        let fd_put = (up.price_put() - dn.price_put()) / (2.0 * h);
        assert_relative_eq!(reference().rho(OptionType::Call), fd_call, epsilon = 1e-4);
        assert_relative_eq!(reference().rho(OptionType::Put), fd_put, epsilon = 1e-4);
    }

    #[test]
    fn test_call_theta_vs_finite_diff() {
        // Theta is -∂V/∂T
        let h = 1e-5;
        let longer = model(100.0, 100.0, 1.0 + h, 0.05, 0.2);
        let shorter = model(100.0, 100.0, 1.0 - h, 0.05, 0.2);
        let fd_theta = -(longer.price_call() - shorter.price_call()) / (2.0 * h);
        assert_relative_eq!(reference().theta(OptionType::Call), fd_theta, epsilon = 1e-4);
    }

    // ==========================================================
    // Checked entry points
    // ==========================================================

    #[test]
    fn test_checked_price_and_greeks() {
        let params = ContractParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
        let bs = BlackScholes::new(params);
        assert_eq!(price(&params, OptionType::Call).unwrap(), bs.price_call());
        assert_eq!(greeks(&params, OptionType::Put).unwrap(), bs.greeks(OptionType::Put));
    }

    #[test]
    fn test_checked_price_surfaces_overflow() {
        // Valid but extreme: spot overflows to infinity in S·N(d1) - K·D·N(d2)
        let params = ContractParameters::new(f64::MAX, f64::MAX, 1.0, -800.0, 0.2).unwrap();
        let err = price(&params, OptionType::Put).unwrap_err();
        assert!(matches!(err, AnalyticalError::NonFiniteResult { quantity: "price", .. }));
    }

    #[test]
    fn test_first_non_finite_names_the_greek() {
        let g = Greeks {
            delta: 0.5,
            gamma: 0.01,
            theta: f64::NAN,
            vega: 30.0,
            rho: f64::INFINITY,
        };
        let (name, _) = g.first_non_finite().unwrap();
        assert_eq!(name, "theta");
    }

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::from_parts(100.0_f32, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert!((bs.price_call() - 10.4506_f32).abs() < 1e-2);
    }
}
