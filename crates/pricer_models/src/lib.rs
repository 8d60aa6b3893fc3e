//! # Pricer Models (L2: Business Logic)
//!
//! Contract definitions and closed-form pricing for European options.
//!
//! This crate provides:
//! - Contract parameters with validated construction ([`instruments`])
//! - Call/Put selection and payoff evaluation ([`instruments::OptionType`])
//! - Standard normal distribution functions ([`analytical::distributions`])
//! - Black-Scholes price and Greeks ([`analytical::BlackScholes`])
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: `f64` for production, `f32` where memory matters
//! - **Validated at the boundary**: a [`instruments::ContractParameters`] value
//!   always satisfies the positivity invariants, so the formulas never guard
//!   against degenerate expiry or volatility themselves
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::BlackScholes;
//! use pricer_models::instruments::{ContractParameters, OptionType};
//!
//! let params = ContractParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let model = BlackScholes::new(params);
//!
//! let price = model.price(OptionType::Call);
//! assert!((price - 10.4506).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
