//! Property tests for the antithetic estimator over random valid contracts.

use approx::assert_relative_eq;
use pricer_models::instruments::{ContractParameters, OptionType};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, SimulationRequest};
use proptest::prelude::*;

fn contract() -> impl Strategy<Value = ContractParameters<f64>> {
    (
        10.0_f64..500.0,
        10.0_f64..500.0,
        0.05_f64..5.0,
        -0.02_f64..0.2,
        0.05_f64..0.8,
    )
        .prop_map(|(s, k, t, r, v)| ContractParameters::new(s, k, t, r, v).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Prices are non-negative and outputs are index-aligned.
    #[test]
    fn prop_outputs_well_formed(params in contract(), n_paths in 1_usize..500, seed in any::<u64>()) {
        let pricer = MonteCarloPricer::new(MonteCarloConfig::default().with_seed(seed));
        for option_type in [OptionType::Call, OptionType::Put] {
            let request = SimulationRequest::new(params, option_type, n_paths).unwrap();
            let result = pricer.simulate(&request);

            prop_assert!(result.price >= 0.0);
            prop_assert!(result.std_error >= 0.0);
            prop_assert_eq!(result.terminal_prices.len(), n_paths);
            prop_assert_eq!(result.antithetic_terminal_prices.len(), n_paths);
            prop_assert_eq!(result.seed, seed);
        }
    }

    /// Call and put share draws, so their difference is the discounted
    /// sample forward minus the discounted strike.
    #[test]
    fn prop_pathwise_parity(params in contract(), n_paths in 1_usize..500) {
        let pricer = MonteCarloPricer::default();
        let call = pricer.simulate(&SimulationRequest::new(params, OptionType::Call, n_paths).unwrap());
        let put = pricer.simulate(&SimulationRequest::new(params, OptionType::Put, n_paths).unwrap());

        prop_assert_eq!(&call.terminal_prices, &put.terminal_prices);

        let n = n_paths as f64;
        let mean_terminal = (call.terminal_prices.iter().sum::<f64>()
            + call.antithetic_terminal_prices.iter().sum::<f64>())
            / (2.0 * n);
        let expected = params.discount_factor() * (mean_terminal - params.strike());
        assert_relative_eq!(call.price - put.price, expected, epsilon = 1e-6, max_relative = 1e-9);
    }
}
