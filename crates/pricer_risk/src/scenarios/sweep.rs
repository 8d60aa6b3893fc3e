//! Sweep specification and execution.

use num_traits::Float;
use pricer_models::analytical::{self, Greeks};
use pricer_models::instruments::{ContractParameters, OptionType};

use super::error::SweepError;
use super::grid::linspace;
use super::variable::SweepVariable;

/// Number of points generated when the caller supplies no values.
pub const DEFAULT_SWEEP_POINTS: usize = 100;

/// Which variable to sweep, over which values, around which base parameters.
///
/// Values are validated to be non-empty and finite on construction. Whether
/// each value keeps the contract inside its domain is only known when the
/// sweep runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSpecification<T: Float> {
    variable: SweepVariable,
    values: Vec<T>,
    base: ContractParameters<T>,
}

impl<T: Float> SweepSpecification<T> {
    /// Creates a specification from explicit values.
    ///
    /// # Errors
    /// `SweepError::EmptyValues` or `SweepError::NonFiniteValue`.
    pub fn new(
        variable: SweepVariable,
        values: Vec<T>,
        base: ContractParameters<T>,
    ) -> Result<Self, SweepError> {
        if values.is_empty() {
            return Err(SweepError::EmptyValues);
        }
        if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SweepError::NonFiniteValue {
                index,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            variable,
            values,
            base,
        })
    }

    /// Creates a specification of `n` evenly spaced values from `low` to `high`.
    pub fn with_range(
        variable: SweepVariable,
        base: ContractParameters<T>,
        low: T,
        high: T,
        n: usize,
    ) -> Result<Self, SweepError> {
        Self::new(variable, linspace(low, high, n), base)
    }

    /// Creates a specification of [`DEFAULT_SWEEP_POINTS`] values over the
    /// variable's [`default_range`](SweepVariable::default_range).
    pub fn with_default_values(
        variable: SweepVariable,
        base: ContractParameters<T>,
    ) -> Result<Self, SweepError> {
        let (low, high) = variable.default_range();
        Self::with_range(
            variable,
            base,
            T::from(low).unwrap_or_else(T::nan),
            T::from(high).unwrap_or_else(T::nan),
            DEFAULT_SWEEP_POINTS,
        )
    }

    /// Returns the swept variable.
    #[inline]
    pub fn variable(&self) -> SweepVariable {
        self.variable
    }

    /// Returns the swept values in order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the base parameters.
    #[inline]
    pub fn base(&self) -> &ContractParameters<T> {
        &self.base
    }
}

/// Index-aligned outputs of a sweep.
///
/// Every sequence has the same length as `values`; element `i` of each
/// corresponds to `values[i]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepResult<T: Float> {
    /// Swept variable
    pub variable: SweepVariable,
    /// Swept values, in input order
    pub values: Vec<T>,
    /// Option prices
    pub prices: Vec<T>,
    /// Delta at each value
    pub delta: Vec<T>,
    /// Gamma at each value
    pub gamma: Vec<T>,
    /// Theta at each value
    pub theta: Vec<T>,
    /// Vega at each value
    pub vega: Vec<T>,
    /// Rho at each value
    pub rho: Vec<T>,
}

impl<T: Float> SweepResult<T> {
    fn with_capacity(variable: SweepVariable, n: usize) -> Self {
        Self {
            variable,
            values: Vec::with_capacity(n),
            prices: Vec::with_capacity(n),
            delta: Vec::with_capacity(n),
            gamma: Vec::with_capacity(n),
            theta: Vec::with_capacity(n),
            vega: Vec::with_capacity(n),
            rho: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, value: T, price: T, greeks: Greeks<T>) {
        self.values.push(value);
        self.prices.push(price);
        self.delta.push(greeks.delta);
        self.gamma.push(greeks.gamma);
        self.theta.push(greeks.theta);
        self.vega.push(greeks.vega);
        self.rho.push(greeks.rho);
    }

    /// Number of swept points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the sweep has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Label of the swept variable.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.variable.label()
    }

    /// Greeks at point `index`.
    pub fn greeks_at(&self, index: usize) -> Option<Greeks<T>> {
        Some(Greeks {
            delta: *self.delta.get(index)?,
            gamma: *self.gamma.get(index)?,
            theta: *self.theta.get(index)?,
            vega: *self.vega.get(index)?,
            rho: *self.rho.get(index)?,
        })
    }
}

/// Recomputes the closed-form price and Greeks across a sweep.
pub struct SensitivitySweeper;

impl SensitivitySweeper {
    /// Evaluates the model at every value of `spec`, in order.
    ///
    /// # Errors
    /// The first point whose parameters are invalid, or whose price or Greeks
    /// are non-finite, fails the whole sweep.
    pub fn sweep<T: Float>(
        spec: &SweepSpecification<T>,
        option_type: OptionType,
    ) -> Result<SweepResult<T>, SweepError> {
        let variable = spec.variable();
        let mut result = SweepResult::with_capacity(variable, spec.values().len());

        for (index, &value) in spec.values().iter().enumerate() {
            let params = variable
                .apply(spec.base(), value)
                .map_err(|source| SweepError::InvalidPoint { index, source })?;

            let price = analytical::price(&params, option_type)
                .map_err(|source| SweepError::PricingFailed { index, source })?;
            let greeks = analytical::greeks(&params, option_type)
                .map_err(|source| SweepError::PricingFailed { index, source })?;

            result.push(value, price, greeks);
        }

        Ok(result)
    }
}
