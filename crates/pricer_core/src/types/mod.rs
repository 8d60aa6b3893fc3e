//! Core types shared by every layer.
//!
//! This module provides:
//! - `error`: The workspace-wide [`PricingError`] taxonomy

pub mod error;

pub use error::PricingError;
