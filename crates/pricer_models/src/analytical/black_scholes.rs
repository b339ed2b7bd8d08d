//! Black-Scholes-Merton model for European options.
//!
//! Closed-form prices and sensitivities under lognormal dynamics with a
//! continuous dividend yield `q`.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qτ)·N(d₁) - K·e^(-rτ)·N(d₂)
//! **Put Price**: P = K·e^(-rτ)·N(-d₂) - S·e^(-qτ)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)τ) / (σ√τ)
//! - d₂ = d₁ - σ√τ
//! - τ = T - t, the time remaining to expiry
//!
//! When σ√τ is zero the lognormal law collapses onto the forward and every
//! quantity is replaced by its deterministic limit.

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Black-Scholes-Merton model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2, 0.0).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    spot: f64,
    rate: f64,
    volatility: f64,
    dividend: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility < 0
    /// - `AnalyticalError::InvalidDividend` if dividend < 0
    pub fn new(spot: f64, rate: f64, volatility: f64, dividend: f64) -> Result<Self, AnalyticalError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !(volatility.is_finite() && volatility >= 0.0) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        if !(dividend.is_finite() && dividend >= 0.0) {
            return Err(AnalyticalError::InvalidDividend { dividend });
        }

        Ok(Self::new_unchecked(spot, rate, volatility, dividend))
    }

    #[inline]
    fn new_unchecked(spot: f64, rate: f64, volatility: f64, dividend: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            dividend,
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Total standard deviation σ√τ (0 for τ <= 0).
    #[inline]
    fn total_vol(&self, tau: f64) -> f64 {
        if tau <= 0.0 {
            0.0
        } else {
            self.volatility * tau.sqrt()
        }
    }

    /// Forward price S·e^((r-q)τ).
    #[inline]
    fn forward(&self, tau: f64) -> f64 {
        self.spot * ((self.rate - self.dividend) * tau.max(0.0)).exp()
    }

    /// Computes d₁ (only meaningful when σ√τ > 0).
    #[inline]
    pub fn d1(&self, strike: f64, tau: f64) -> f64 {
        let vol_sqrt_t = self.total_vol(tau);
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate - self.dividend + 0.5 * self.volatility * self.volatility) * tau;
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes d₂ = d₁ - σ√τ.
    #[inline]
    pub fn d2(&self, strike: f64, tau: f64) -> f64 {
        self.d1(strike, tau) - self.total_vol(tau)
    }

    /// European call price.
    pub fn price_call(&self, strike: f64, tau: f64) -> f64 {
        let tau_pos = tau.max(0.0);
        let df = (-self.rate * tau_pos).exp();

        if self.total_vol(tau) == 0.0 {
            return df * (self.forward(tau) - strike).max(0.0);
        }

        let dq = (-self.dividend * tau_pos).exp();
        let d1 = self.d1(strike, tau);
        let d2 = self.d2(strike, tau);
        self.spot * dq * norm_cdf(d1) - strike * df * norm_cdf(d2)
    }

    /// European put price.
    pub fn price_put(&self, strike: f64, tau: f64) -> f64 {
        let tau_pos = tau.max(0.0);
        let df = (-self.rate * tau_pos).exp();

        if self.total_vol(tau) == 0.0 {
            return df * (strike - self.forward(tau)).max(0.0);
        }

        let dq = (-self.dividend * tau_pos).exp();
        let d1 = self.d1(strike, tau);
        let d2 = self.d2(strike, tau);
        strike * df * norm_cdf(-d2) - self.spot * dq * norm_cdf(-d1)
    }

    /// Delta ∂V/∂S.
    ///
    /// - Call Delta = e^(-qτ)·N(d₁)
    /// - Put Delta = e^(-qτ)·(N(d₁) - 1)
    pub fn delta(&self, strike: f64, tau: f64, is_call: bool) -> f64 {
        let dq = (-self.dividend * tau.max(0.0)).exp();

        if self.total_vol(tau) == 0.0 {
            let forward = self.forward(tau);
            return if is_call {
                if forward > strike { dq } else { 0.0 }
            } else if forward < strike {
                -dq
            } else {
                0.0
            };
        }

        let n_d1 = norm_cdf(self.d1(strike, tau));
        if is_call {
            dq * n_d1
        } else {
            dq * (n_d1 - 1.0)
        }
    }

    /// Gamma ∂²V/∂S² = e^(-qτ)·φ(d₁) / (S·σ·√τ). Same for calls and puts.
    pub fn gamma(&self, strike: f64, tau: f64) -> f64 {
        let vol_sqrt_t = self.total_vol(tau);
        if vol_sqrt_t == 0.0 {
            return 0.0;
        }
        let dq = (-self.dividend * tau).exp();
        dq * norm_pdf(self.d1(strike, tau)) / (self.spot * vol_sqrt_t)
    }

    /// Vega ∂V/∂σ = S·e^(-qτ)·φ(d₁)·√τ. Same for calls and puts.
    pub fn vega(&self, strike: f64, tau: f64) -> f64 {
        if self.total_vol(tau) == 0.0 {
            return 0.0;
        }
        let dq = (-self.dividend * tau).exp();
        self.spot * dq * norm_pdf(self.d1(strike, tau)) * tau.sqrt()
    }
}

/// Call delta at spot `spot` and calendar time `t` of an option expiring at `expiry`.
///
/// Inputs are not validated; `spot` must be positive.
///
/// # Examples
/// ```
/// use pricer_models::analytical::delta;
///
/// let d = delta(100.0, 0.0, 100.0, 1.0, 0.2, 0.05, 0.0);
/// assert!(d > 0.5 && d < 0.7);
/// ```
#[inline]
pub fn delta(spot: f64, t: f64, strike: f64, expiry: f64, volatility: f64, rate: f64, dividend: f64) -> f64 {
    BlackScholes::new_unchecked(spot, rate, volatility, dividend).delta(strike, expiry - t, true)
}

/// Put counterpart of [`delta`].
#[inline]
pub fn put_delta(spot: f64, t: f64, strike: f64, expiry: f64, volatility: f64, rate: f64, dividend: f64) -> f64 {
    BlackScholes::new_unchecked(spot, rate, volatility, dividend).delta(strike, expiry - t, false)
}

/// Gamma at spot `spot` and calendar time `t` of an option expiring at `expiry`.
#[inline]
pub fn gamma(spot: f64, t: f64, strike: f64, expiry: f64, volatility: f64, rate: f64, dividend: f64) -> f64 {
    BlackScholes::new_unchecked(spot, rate, volatility, dividend).gamma(strike, expiry - t)
}

/// Vega at spot `spot` and calendar time `t` of an option expiring at `expiry`.
#[inline]
pub fn vega(spot: f64, t: f64, strike: f64, expiry: f64, volatility: f64, rate: f64, dividend: f64) -> f64 {
    BlackScholes::new_unchecked(spot, rate, volatility, dividend).vega(strike, expiry - t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_call_put() {
        // Hull-style reference: S=41, K=40, r=8%, σ=30%, T=1
        let bs = BlackScholes::new(41.0, 0.08, 0.30, 0.0).unwrap();
        assert_relative_eq!(bs.price_call(40.0, 1.0), 6.960998922548743, epsilon = 1e-9);
        assert_relative_eq!(bs.price_put(40.0, 1.0), 2.8856527780141707, epsilon = 1e-9);
    }

    #[test]
    fn test_put_call_parity_with_dividend() {
        let bs = BlackScholes::new(100.0, 0.06, 0.2, 0.03).unwrap();
        let (k, tau) = (95.0, 0.75);
        let lhs = bs.price_call(k, tau) - bs.price_put(k, tau);
        let rhs = 100.0 * (-0.03_f64 * tau).exp() - k * (-0.06_f64 * tau).exp();
        assert_relative_eq!(lhs, rhs, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(BlackScholes::new(-1.0, 0.05, 0.2, 0.0).is_err());
        assert!(BlackScholes::new(100.0, 0.05, -0.2, 0.0).is_err());
        assert!(BlackScholes::new(100.0, 0.05, 0.2, -0.1).is_err());
        assert!(BlackScholes::new(100.0, 0.05, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_zero_volatility_is_discounted_forward_intrinsic() {
        let bs = BlackScholes::new(41.0, 0.08, 0.0, 0.0).unwrap();
        let expected = ((41.0 * 0.08_f64.exp()) - 40.0) * (-0.08_f64).exp();
        assert_relative_eq!(bs.price_call(40.0, 1.0), expected, epsilon = 1e-12);
        assert_eq!(bs.price_put(40.0, 1.0), 0.0);
        assert_eq!(bs.gamma(40.0, 1.0), 0.0);
        assert_eq!(bs.vega(40.0, 1.0), 0.0);
    }

    #[test]
    fn test_greeks_match_finite_differences() {
        let (s, k, tau) = (100.0, 105.0, 0.5);
        let bs = BlackScholes::new(s, 0.05, 0.25, 0.02).unwrap();
        let h = 1e-3;

        let up = BlackScholes::new(s + h, 0.05, 0.25, 0.02).unwrap();
        let down = BlackScholes::new(s - h, 0.05, 0.25, 0.02).unwrap();
        let fd_delta = (up.price_call(k, tau) - down.price_call(k, tau)) / (2.0 * h);
        let fd_gamma =
            (up.price_call(k, tau) - 2.0 * bs.price_call(k, tau) + down.price_call(k, tau)) / (h * h);
        assert_relative_eq!(bs.delta(k, tau, true), fd_delta, epsilon = 1e-6);
        assert_relative_eq!(bs.gamma(k, tau), fd_gamma, epsilon = 1e-4);

        let vup = BlackScholes::new(s, 0.05, 0.25 + h, 0.02).unwrap();
        let vdown = BlackScholes::new(s, 0.05, 0.25 - h, 0.02).unwrap();
        let fd_vega = (vup.price_call(k, tau) - vdown.price_call(k, tau)) / (2.0 * h);
        assert_relative_eq!(bs.vega(k, tau), fd_vega, epsilon = 1e-5);
    }

    #[test]
    fn test_put_delta_relation() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2, 0.03).unwrap();
        let dq = (-0.03_f64).exp();
        let diff = bs.delta(100.0, 1.0, true) - bs.delta(100.0, 1.0, false);
        assert_relative_eq!(diff, dq, epsilon = 1e-14);
    }

    #[test]
    fn test_free_functions_use_remaining_time() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2, 0.01).unwrap();
        assert_eq!(delta(100.0, 0.25, 100.0, 1.0, 0.2, 0.05, 0.01), bs.delta(100.0, 0.75, true));
        assert_eq!(gamma(100.0, 0.25, 100.0, 1.0, 0.2, 0.05, 0.01), bs.gamma(100.0, 0.75));
        assert_eq!(vega(100.0, 0.25, 100.0, 1.0, 0.2, 0.05, 0.01), bs.vega(100.0, 0.75));
        assert_eq!(put_delta(100.0, 0.25, 100.0, 1.0, 0.2, 0.05, 0.01), bs.delta(100.0, 0.75, false));
    }

    #[test]
    fn test_at_expiry_limits() {
        assert_eq!(delta(110.0, 1.0, 100.0, 1.0, 0.2, 0.05, 0.0), 1.0);
        assert_eq!(delta(90.0, 1.0, 100.0, 1.0, 0.2, 0.05, 0.0), 0.0);
        assert_eq!(gamma(100.0, 1.0, 100.0, 1.0, 0.2, 0.05, 0.0), 0.0);
        assert_eq!(vega(100.0, 1.5, 100.0, 1.0, 0.2, 0.05, 0.0), 0.0);
    }
}
