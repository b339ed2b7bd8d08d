//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error type shared by the market data, model and pricing layers
//!
//! # Re-exports
//!
//! - [`PricingError`] from `error`

pub mod error;

pub use error::PricingError;
