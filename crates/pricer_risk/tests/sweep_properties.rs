//! Property tests for the sensitivity sweeper.

use approx::assert_relative_eq;
use pricer_models::analytical::price;
use pricer_models::instruments::{ContractParameters, OptionType};
use pricer_risk::scenarios::{SensitivitySweeper, SweepSpecification, SweepVariable};
use proptest::prelude::*;

fn base() -> ContractParameters<f64> {
    ContractParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
}

#[test]
fn test_put_delta_non_increasing_in_spot() {
    let spec = SweepSpecification::with_range(SweepVariable::Spot, base(), 50.0, 150.0, 100).unwrap();
    let result = SensitivitySweeper::sweep(&spec, OptionType::Put).unwrap();

    assert_eq!(result.delta.len(), 100);
    for pair in result.delta.windows(2) {
        assert!(pair[1] >= pair[0], "put delta decreased: {} -> {}", pair[0], pair[1]);
    }
    assert!(result.delta[0] > -1.0 && result.delta[99] < 0.0);
}

#[test]
fn test_call_price_increasing_in_volatility() {
    let spec = SweepSpecification::with_default_values(SweepVariable::Volatility, base()).unwrap();
    let result = SensitivitySweeper::sweep(&spec, OptionType::Call).unwrap();

    for pair in result.prices.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_every_default_range_sweeps_cleanly() {
    for variable in SweepVariable::ALL {
        for option_type in [OptionType::Call, OptionType::Put] {
            let spec = SweepSpecification::with_default_values(variable, base()).unwrap();
            let result = SensitivitySweeper::sweep(&spec, option_type).unwrap();
            assert_eq!(result.len(), spec.values().len());
            assert!(result.prices.iter().all(|p| p.is_finite() && *p > -1e-9));
        }
    }
}

fn variable_strategy() -> impl Strategy<Value = SweepVariable> {
    prop_oneof![
        Just(SweepVariable::Spot),
        Just(SweepVariable::Strike),
        Just(SweepVariable::Expiry),
        Just(SweepVariable::Volatility),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Output sequences are index-aligned with the input values.
    #[test]
    fn prop_lengths_match_values(
        variable in variable_strategy(),
        values in prop::collection::vec(0.05_f64..2.0, 1..40),
    ) {
        let spec = SweepSpecification::new(variable, values.clone(), base()).unwrap();
        let result = SensitivitySweeper::sweep(&spec, OptionType::Call).unwrap();

        prop_assert_eq!(result.values.len(), values.len());
        prop_assert_eq!(result.prices.len(), values.len());
        prop_assert_eq!(result.delta.len(), values.len());
        prop_assert_eq!(result.gamma.len(), values.len());
        prop_assert_eq!(result.theta.len(), values.len());
        prop_assert_eq!(result.vega.len(), values.len());
        prop_assert_eq!(result.rho.len(), values.len());
    }

    /// Each swept price equals the closed form at the substituted point.
    #[test]
    fn prop_pointwise_equal_to_price(
        rates in prop::collection::vec(-0.05_f64..0.5, 1..20),
        is_call in any::<bool>(),
    ) {
        let option_type = if is_call { OptionType::Call } else { OptionType::Put };
        let spec = SweepSpecification::new(SweepVariable::Rate, rates.clone(), base()).unwrap();
        let result = SensitivitySweeper::sweep(&spec, option_type).unwrap();

        for (i, &rate) in rates.iter().enumerate() {
            let params = ContractParameters::new(100.0, 100.0, 1.0, rate, 0.2).unwrap();
            let expected = price(&params, option_type).unwrap();
            assert_relative_eq!(result.prices[i], expected, epsilon = 1e-12);
        }
    }
}
