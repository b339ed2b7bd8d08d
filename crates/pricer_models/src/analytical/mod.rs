//! Analytical formulas for European options.
//!
//! This module provides closed-form solutions used for validation and as
//! control variates:
//! - Black-Scholes-Merton prices with continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega)
//!
//! ## Numerical Stability
//!
//! The normal CDF is evaluated through `erfc`, which keeps full relative
//! accuracy deep in the tails.

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{delta, gamma, put_delta, vega, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
