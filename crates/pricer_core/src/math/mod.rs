//! Numerical building blocks shared by the pricing engines.
//!
//! - [`binomial`]: Numerically stable binomial probabilities (log-gamma based)
//! - [`statistics`]: Streaming, mergeable sample statistics for Monte Carlo estimators

pub mod binomial;
pub mod statistics;

pub use binomial::{binomial_pmf, ln_binomial_pmf};
pub use statistics::SampleStatistics;
