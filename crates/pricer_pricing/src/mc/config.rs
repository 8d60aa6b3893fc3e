//! Monte Carlo simulation configuration.

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Seed used for the primary pricing stream unless configured otherwise.
pub const DEFAULT_SEED: u64 = 42;

/// Monte Carlo simulation configuration.
///
/// The primary pricing stream is reseeded with [`seed`](Self::seed) on every
/// [`simulate`](super::MonteCarloPricer::simulate) call. The diagnostic path
/// stream uses [`path_seed`](Self::path_seed) when set and fresh entropy
/// otherwise; the two streams never share state.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{MonteCarloConfig, DEFAULT_SEED};
///
/// let config = MonteCarloConfig::default();
/// assert_eq!(config.seed(), DEFAULT_SEED);
/// assert_eq!(config.path_seed(), None);
///
/// let config = config.with_seed(7).with_path_seed(11);
/// assert_eq!(config.seed(), 7);
/// assert_eq!(config.path_seed(), Some(11));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    seed: u64,
    path_seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            path_seed: None,
        }
    }
}

impl MonteCarloConfig {
    /// Returns a copy with the primary seed replaced.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns a copy with a fixed seed for the diagnostic path stream.
    #[inline]
    pub fn with_path_seed(mut self, seed: u64) -> Self {
        self.path_seed = Some(seed);
        self
    }

    /// Returns the primary pricing seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the diagnostic path seed, if fixed.
    #[inline]
    pub fn path_seed(&self) -> Option<u64> {
        self.path_seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MonteCarloConfig::default();
        assert_eq!(config.seed(), 42);
        assert!(config.path_seed().is_none());
    }

    #[test]
    fn test_with_seed_keeps_path_seed() {
        let config = MonteCarloConfig::default().with_path_seed(5).with_seed(9);
        assert_eq!(config.seed(), 9);
        assert_eq!(config.path_seed(), Some(5));
    }
}
