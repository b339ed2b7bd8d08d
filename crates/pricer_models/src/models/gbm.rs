//! Geometric Brownian Motion (GBM) step.
//!
//! Under the risk-neutral measure with dividend yield q:
//! ```text
//! dS = (r - q) * S * dt + sigma * S * dW
//! ```
//!
//! ## Log-space formulation
//!
//! The exact solution over one step is used:
//! ```text
//! S(t+dt) = S(t) * exp((r - q - 0.5*sigma^2)*dt + sigma*sqrt(dt)*Z)
//! ```

/// Precomputed drift and diffusion of one GBM step.
///
/// # Examples
/// ```
/// use pricer_models::models::GbmStep;
///
/// let step = GbmStep::new(0.05, 0.0, 0.2, 1.0);
/// let s1 = step.advance(100.0, 0.0);
/// assert!((s1 - 100.0 * (0.05_f64 - 0.02).exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStep {
    drift_dt: f64,
    vol_sqrt_dt: f64,
}

impl GbmStep {
    /// Creates the step for horizon `dt`.
    #[inline]
    pub fn new(rate: f64, dividend: f64, volatility: f64, dt: f64) -> Self {
        Self {
            drift_dt: (rate - dividend - 0.5 * volatility * volatility) * dt,
            vol_sqrt_dt: volatility * dt.sqrt(),
        }
    }

    /// Advances `spot` by one step driven by the standard normal `z`.
    #[inline]
    pub fn advance(&self, spot: f64, z: f64) -> f64 {
        spot * (self.drift_dt + self.vol_sqrt_dt * z).exp()
    }
}
