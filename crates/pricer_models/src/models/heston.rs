//! Stochastic variance dynamics.
//!
//! The path engine evolves a price `S` and an instantaneous variance `V`
//! driven by two independent standard normals `z1` (variance) and `z2`
//! (price):
//! ```text
//! V[i] = max(0, V[i-1] + alpha*dt + (Vbar - V[i-1]) + xi*sqrt(dt)*z1)
//! S[i] = S[i-1] * exp((r - 0.5*V[i-1])*dt + sqrt(V[i-1]*dt)*z2)
//! ```
//! The variance recursion is kept exactly in this form. The floor is an
//! absorbing reflection at zero, applied on every step, so `sqrt(V)` is
//! always defined.
//!
//! For the vega control variate the conditional mean of the continuous
//! mean-reverting process is used:
//! ```text
//! E[V(t+dt) | V(t)] = V(t)*exp(-alpha*dt) + Vbar*(1 - exp(-alpha*dt))
//! ```

use pricer_core::types::PricingError;
use thiserror::Error;

/// Stochastic variance parameter errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Mean-reversion speed is not finite.
    #[error("Invalid mean-reversion speed: alpha = {0}")]
    InvalidAlpha(f64),

    /// Long-run variance is negative or not finite.
    #[error("Invalid long-run variance: Vbar = {0} (must be non-negative)")]
    InvalidLongRunVariance(f64),

    /// Vol-of-vol is negative or not finite.
    #[error("Invalid vol-of-vol: xi = {0} (must be non-negative)")]
    InvalidVolOfVol(f64),
}

impl From<ModelError> for PricingError {
    fn from(err: ModelError) -> Self {
        PricingError::InvalidConfiguration(err.to_string())
    }
}

/// Parameters of the variance process.
///
/// # Examples
/// ```
/// use pricer_models::models::StochasticVarianceParams;
///
/// let params = StochasticVarianceParams::new(5.0, 0.02, 0.3).unwrap();
/// assert_eq!(params.vbar(), 0.02);
/// assert!(StochasticVarianceParams::new(5.0, -0.02, 0.3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StochasticVarianceParams {
    alpha: f64,
    vbar: f64,
    xi: f64,
}

impl StochasticVarianceParams {
    /// Validates and creates the parameter set.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Mean-reversion speed
    /// * `vbar` - Long-run variance, also the initial variance (>= 0)
    /// * `xi` - Vol-of-vol (>= 0)
    pub fn new(alpha: f64, vbar: f64, xi: f64) -> Result<Self, ModelError> {
        if !alpha.is_finite() {
            return Err(ModelError::InvalidAlpha(alpha));
        }
        if !(vbar.is_finite() && vbar >= 0.0) {
            return Err(ModelError::InvalidLongRunVariance(vbar));
        }
        if !(xi.is_finite() && xi >= 0.0) {
            return Err(ModelError::InvalidVolOfVol(xi));
        }
        Ok(Self { alpha, vbar, xi })
    }

    /// Mean-reversion speed.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Long-run variance.
    #[inline]
    pub fn vbar(&self) -> f64 {
        self.vbar
    }

    /// Vol-of-vol.
    #[inline]
    pub fn xi(&self) -> f64 {
        self.xi
    }

    /// Next variance, floored at zero.
    #[inline]
    pub fn variance_step(&self, v_prev: f64, dt: f64, z1: f64) -> f64 {
        let v_next = v_prev + self.alpha * dt + (self.vbar - v_prev) + self.xi * dt.sqrt() * z1;
        v_next.max(0.0)
    }

    /// Conditional mean of the variance after `dt`.
    #[inline]
    pub fn expected_variance(&self, v_prev: f64, dt: f64) -> f64 {
        let decay = (-self.alpha * dt).exp();
        v_prev * decay + self.vbar * (1.0 - decay)
    }
}

/// Next price given the previous-step variance.
#[inline]
pub fn spot_step(s_prev: f64, v_prev: f64, rate: f64, dt: f64, z2: f64) -> f64 {
    s_prev * ((rate - 0.5 * v_prev) * dt + (v_prev * dt).sqrt() * z2).exp()
}
