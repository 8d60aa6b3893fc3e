//! # Pricer Risk (L4: Application)
//!
//! Sensitivity analysis of the closed-form model.
//!
//! This crate provides:
//! - Sweep variables with user-facing labels and default ranges
//! - Sweep specifications over caller-supplied or evenly spaced values
//! - The [`scenarios::SensitivitySweeper`], recomputing price and the five
//!   Greeks at each swept value
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  scenarios/  - SweepVariable,          │
//! │                SweepSpecification,      │
//! │                SensitivitySweeper       │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Black-Scholes price and Greeks         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{ContractParameters, OptionType};
//! use pricer_risk::scenarios::{SensitivitySweeper, SweepSpecification, SweepVariable};
//!
//! let base = ContractParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let spec = SweepSpecification::with_range(SweepVariable::Spot, base, 50.0, 150.0, 11).unwrap();
//!
//! let result = SensitivitySweeper::sweep(&spec, OptionType::Put).unwrap();
//! assert_eq!(result.len(), 11);
//! assert_eq!(result.values[5], 100.0);
//! assert!((result.prices[5] - 5.5735).abs() < 1e-3);
//! ```

#![warn(missing_docs)]

pub mod scenarios;
