//! # pricer_core: Foundation Layer for the Option Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Market data snapshot: [`MarketData`](market_data::MarketData)
//! - Error types shared by every layer: [`PricingError`](types::PricingError)
//! - Numerical building blocks (`math`): log-gamma binomial probabilities and
//!   mergeable sample statistics for Monte Carlo estimators
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: log-gamma special function
//! - thiserror: error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketData;
//! use pricer_core::math::binomial_pmf;
//!
//! // Argument order: rate, spot, volatility, dividend
//! let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
//! assert_eq!(data.spot(), 41.0);
//!
//! let p = binomial_pmf(2, 4, 0.5);
//! assert!((p - 0.375).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `MarketData`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
