//! Standard normal distribution functions.
//!
//! - `norm_cdf`: Cumulative distribution function Φ(x)
//! - `norm_pdf`: Probability density function φ(x)
//!
//! Both are generic over `T: Float`. The CDF uses Hart's (1968) double
//! precision rational approximation in the form given by West (2005),
//! "Better approximations to cumulative normal functions", with absolute
//! error below 1e-14. The tail value is computed once and reflected, so
//! Φ(x) + Φ(-x) = 1 up to rounding.

use num_traits::Float;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2π)
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Beyond this |x| the tail mass underflows f64.
const TAIL_CUTOFF: f64 = 37.0;

/// Switch point between the rational and the continued-fraction branch (10/√2).
const BRANCH_POINT: f64 = 7.071_067_811_865_47;

const NUMERATOR: [f64; 7] = [
    3.526_249_659_989_11e-2,
    0.700_383_064_443_688,
    6.373_962_203_531_65,
    33.912_866_078_383,
    112.079_291_497_871,
    221.213_596_169_931,
    220.206_867_912_376,
];

const DENOMINATOR: [f64; 8] = [
    8.838_834_764_831_84e-2,
    1.755_667_163_182_64,
    16.064_177_579_207,
    86.780_732_202_946_1,
    296.564_248_779_674,
    637.333_633_378_831,
    793.826_512_519_948,
    440.413_735_824_752,
];

#[inline]
pub(crate) fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

#[inline]
fn horner<T: Float>(coefficients: &[f64], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + constant(c))
}

/// Lower tail mass Φ(-|x|).
#[inline]
fn lower_tail<T: Float>(abs_x: T) -> T {
    if abs_x > constant(TAIL_CUTOFF) {
        return T::zero();
    }

    let gaussian = (-abs_x * abs_x / constant(2.0)).exp();

    if abs_x < constant(BRANCH_POINT) {
        gaussian * horner(&NUMERATOR, abs_x) / horner(&DENOMINATOR, abs_x)
    } else {
        let mut fraction = abs_x + constant(0.65);
        for k in [4.0, 3.0, 2.0, 1.0] {
            fraction = abs_x + constant::<T>(k) / fraction;
        }
        gaussian / fraction / constant(SQRT_2PI)
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Returns
/// The probability in `[0, 1]`. NaN input propagates as NaN.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0_f64) - 0.841_344_746_068_542_9).abs() < 1e-13);
/// assert!(norm_cdf(-40.0_f64) == 0.0);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    if x.is_nan() {
        return x;
    }

    let tail = lower_tail(x.abs());
    if x > T::zero() {
        T::one() - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.398_942_280_4).abs() < 1e-10);
/// assert!((norm_pdf(1.0_f64) - 0.241_970_724_5).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    constant::<T>(FRAC_1_SQRT_2PI) * (-x * x / constant(2.0)).exp()
}
