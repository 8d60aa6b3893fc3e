//! Terminal price generation under risk-neutral geometric Brownian motion.
//!
//! European payoffs depend only on the terminal price, so each path is a
//! single exact step of the log-normal solution:
//!
//! ```text
//! S_T = S₀ · exp((r - σ²/2)T + σ√T · z),  z ~ N(0, 1)
//! ```

use pricer_models::instruments::ContractParameters;

/// Parameters for Geometric Brownian Motion terminal sampling.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let gbm = GbmParams::new(100.0, 0.05, 0.2, 1.0);
///
/// // z = 0 gives the median terminal price
/// assert!((gbm.terminal_price(0.0) - 100.0 * 0.03_f64.exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Log drift over the horizon: (r - σ²/2)T.
    #[inline]
    pub fn log_drift(&self) -> f64 {
        (self.rate - 0.5 * self.volatility * self.volatility) * self.maturity
    }

    /// Diffusion scale over the horizon: σ√T.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.volatility * self.maturity.sqrt()
    }

    /// Terminal price for one standard normal draw.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        self.spot * (self.log_drift() + self.diffusion() * z).exp()
    }

    /// Terminal prices for a slice of draws, in index order.
    pub fn terminal_prices(&self, randoms: &[f64]) -> Vec<f64> {
        let drift = self.log_drift();
        let diffusion = self.diffusion();
        randoms
            .iter()
            .map(|&z| self.spot * (drift + diffusion * z).exp())
            .collect()
    }
}

impl From<&ContractParameters<f64>> for GbmParams {
    fn from(params: &ContractParameters<f64>) -> Self {
        Self::new(
            params.spot(),
            params.rate(),
            params.volatility(),
            params.expiry(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_drift_and_diffusion() {
        let gbm = GbmParams::new(100.0, 0.05, 0.2, 4.0);
        assert_relative_eq!(gbm.log_drift(), (0.05 - 0.02) * 4.0, epsilon = 1e-15);
        assert_relative_eq!(gbm.diffusion(), 0.4, epsilon = 1e-15);
    }

    #[test]
    fn test_antithetic_pair_is_log_symmetric() {
        let gbm = GbmParams::new(100.0, 0.03, 0.3, 2.0);
        for z in [-2.5, -0.3, 0.0, 1.1, 3.0] {
            let log_sum = gbm.terminal_price(z).ln() + gbm.terminal_price(-z).ln();
            assert_relative_eq!(
                log_sum,
                2.0 * (100.0_f64.ln() + gbm.log_drift()),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_batch_matches_single() {
        let gbm = GbmParams::new(50.0, 0.01, 0.4, 0.5);
        let randoms = [-1.0, 0.0, 0.25, 2.0];
        let batch = gbm.terminal_prices(&randoms);
        for (st, &z) in batch.iter().zip(randoms.iter()) {
            assert_relative_eq!(*st, gbm.terminal_price(z), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_from_contract_parameters() {
        let params = ContractParameters::new(100.0, 90.0, 1.5, 0.02, 0.25).unwrap();
        let gbm = GbmParams::from(&params);
        assert_eq!(gbm, GbmParams::new(100.0, 0.02, 0.25, 1.5));
    }
}
