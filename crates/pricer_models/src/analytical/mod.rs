//! Closed-form pricing for European options.
//!
//! This module provides:
//! - Black-Scholes price, `d1`/`d2` and the five Greeks
//! - Standard normal CDF and PDF
//! - [`AnalyticalError`] for non-finite results surfaced by the checked entry points

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::{greeks, price, BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
