//! Single-step dynamics used by the Monte Carlo engines.
//!
//! - [`gbm`]: log-Euler step of geometric Brownian motion
//! - [`heston`]: mean-reverting stochastic variance step with a zero floor
//!
//! Engines own the random draws and the time grid; these types only map a
//! state and a normal variate to the next state.

pub mod gbm;
pub mod heston;

pub use gbm::GbmStep;
pub use heston::{ModelError, StochasticVarianceParams};
