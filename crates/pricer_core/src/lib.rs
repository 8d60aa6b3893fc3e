//! # pricer_core: Foundation Types for European Option Analytics
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace. It carries the error
//! taxonomy that every higher layer converts its own errors into, so that a
//! caller handling results from the closed-form model, the sensitivity sweep
//! and the Monte Carlo estimator only has to match on one type.
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates. `serde` is optional.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::PricingError;
//!
//! let err = PricingError::InvalidArgument("path count must be positive".to_string());
//! assert!(err.is_caller_error());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`types::PricingError`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
