//! Binomial lattice engine.
//!
//! The terminal distribution of a recombining lattice is binomial, so the
//! expectation is taken directly over the `steps + 1` terminal nodes instead
//! of by backward induction:
//!
//! ```text
//! u  = exp(b·dt + σ·√dt)      d = exp(b·dt − σ·√dt)      b = r − q
//! pu = (exp(b·dt) − d) / (u − d)
//! V  = exp(−r·T) · Σ_{i=0..n} payoff(S·u^(n−i)·d^i) · P[Bin(n, pu) = n−i]
//! ```
//!
//! Node spots are evaluated in log space and the binomial weights through the
//! log-gamma function, which keeps lattices of thousands of steps stable.

use pricer_core::market_data::MarketData;
use pricer_core::math::binomial_pmf;
use pricer_core::types::PricingError;
use pricer_models::instruments::Payoff;

use crate::mc::{validate_steps, ConfigError};
use crate::result::PricingResult;

/// Lattice evaluation algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BinomialPricer {
    /// European exercise: closed-form expectation over terminal nodes.
    #[default]
    European,
}

/// Binomial lattice engine parameters.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::engine::BinomialEngine;
///
/// let mut engine = BinomialEngine::new(3).unwrap();
/// assert_eq!(engine.steps(), 3);
/// assert!(engine.set_steps(0).is_err());
/// assert_eq!(engine.steps(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinomialEngine {
    steps: usize,
    pricer: BinomialPricer,
}

impl BinomialEngine {
    /// Creates a lattice with `steps` time steps and the default pricer.
    ///
    /// # Errors
    /// `ConfigError::InvalidStepCount` unless `1 <= steps <= 10_000`.
    pub fn new(steps: usize) -> Result<Self, ConfigError> {
        validate_steps(steps)?;
        Ok(Self {
            steps,
            pricer: BinomialPricer::default(),
        })
    }

    /// Selects the lattice algorithm.
    #[inline]
    pub fn with_pricer(mut self, pricer: BinomialPricer) -> Self {
        self.pricer = pricer;
        self
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Lattice algorithm.
    #[inline]
    pub fn pricer(&self) -> BinomialPricer {
        self.pricer
    }

    /// Sets the step count, leaving the engine unchanged on error.
    pub fn set_steps(&mut self, steps: usize) -> Result<(), ConfigError> {
        validate_steps(steps)?;
        self.steps = steps;
        Ok(())
    }

    /// Prices `payoff` on the lattice.
    ///
    /// # Errors
    /// `PricingError::UnsupportedPayoff` for path-dependent payoffs, which
    /// need more than the terminal nodes.
    pub fn price(&self, payoff: &Payoff, data: &MarketData) -> Result<PricingResult, PricingError> {
        if payoff.is_path_dependent() {
            return Err(PricingError::UnsupportedPayoff(format!(
                "binomial lattice cannot price path-dependent payoff '{}'",
                payoff.function()
            )));
        }

        match self.pricer {
            BinomialPricer::European => Ok(PricingResult::exact(european(self.steps, payoff, data))),
        }
    }
}

fn european(steps: usize, payoff: &Payoff, data: &MarketData) -> f64 {
    let expiry = payoff.expiry();
    let discount = data.discount_factor(expiry);

    let dt = expiry / steps as f64;
    let vol_sqrt_dt = data.volatility() * dt.sqrt();

    // u == d: the lattice collapses onto the forward.
    if vol_sqrt_dt == 0.0 {
        return payoff.evaluate(data.forward(expiry)) * discount;
    }

    let spot = data.spot();
    let carry = data.carry();

    let ln_u = carry * dt + vol_sqrt_dt;
    let ln_d = carry * dt - vol_sqrt_dt;
    let u = ln_u.exp();
    let d = ln_d.exp();
    let pu = ((carry * dt).exp() - d) / (u - d);

    let expectation: f64 = (0..=steps)
        .map(|i| {
            let ups = steps - i;
            let node = spot * (ups as f64 * ln_u + i as f64 * ln_d).exp();
            payoff.evaluate(node) * binomial_pmf(ups, steps, pu)
        })
        .sum();

    expectation * discount
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::instruments::PayoffFunction;

    fn hull_data() -> MarketData {
        MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap()
    }

    #[test]
    fn test_single_step_by_hand() {
        let data = hull_data();
        let payoff = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();
        let engine = BinomialEngine::new(1).unwrap();

        let u = (0.08_f64 + 0.30).exp();
        let d = (0.08_f64 - 0.30).exp();
        let pu = (0.08_f64.exp() - d) / (u - d);
        let expected = (-0.08_f64).exp() * (pu * (41.0 * u - 40.0).max(0.0) + (1.0 - pu) * (41.0 * d - 40.0).max(0.0));

        let price = engine.price(&payoff, &data).unwrap().price;
        assert_relative_eq!(price, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_three_step_regression() {
        let payoff = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();
        let engine = BinomialEngine::new(3).unwrap();
        let price = engine.price(&payoff, &hull_data()).unwrap().price;
        assert_relative_eq!(price, 7.073853261277716, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_volatility_is_discounted_forward_payoff() {
        let data = MarketData::new(0.05, 100.0, 0.0, 0.0).unwrap();
        let payoff = Payoff::vanilla(1.0, 100.0, PayoffFunction::Call).unwrap();
        let price = BinomialEngine::new(50).unwrap().price(&payoff, &data).unwrap();

        let expected = (100.0 * 0.05_f64.exp() - 100.0) * (-0.05_f64).exp();
        assert_relative_eq!(price.price, expected, epsilon = 1e-12);
        assert_eq!(price.std_error, None);
    }

    #[test]
    fn test_rejects_path_dependent_payoff() {
        let payoff = Payoff::exotic(1.0, 40.0, PayoffFunction::LookbackCall).unwrap();
        let result = BinomialEngine::new(10).unwrap().price(&payoff, &hull_data());
        assert!(matches!(result, Err(PricingError::UnsupportedPayoff(_))));
    }

    #[test]
    fn test_exotic_variant_with_terminal_function_is_priced() {
        let vanilla = Payoff::vanilla(1.0, 40.0, PayoffFunction::Put).unwrap();
        let exotic = Payoff::exotic(1.0, 40.0, PayoffFunction::Put).unwrap();
        let engine = BinomialEngine::new(25).unwrap();
        assert_eq!(
            engine.price(&vanilla, &hull_data()).unwrap(),
            engine.price(&exotic, &hull_data()).unwrap()
        );
    }

    #[test]
    fn test_step_validation() {
        assert_eq!(BinomialEngine::new(0), Err(ConfigError::InvalidStepCount(0)));
        assert!(BinomialEngine::new(10_001).is_err());
    }
}
