//! Naive Monte Carlo engine under geometric Brownian motion.
//!
//! Terminal payoffs draw one normal per replication over the full horizon:
//! `S_T = S·exp((r − q − σ²/2)·T + σ·√T·z)`. Path-dependent payoffs simulate
//! `steps` log-Euler increments of length `T/steps` and evaluate the payoff on
//! the path including the initial spot.

use pricer_core::market_data::MarketData;
use pricer_core::types::PricingError;
use pricer_models::instruments::Payoff;
use pricer_models::models::GbmStep;

use crate::mc::{run_replications, ConfigError, MonteCarloConfig};
use crate::result::PricingResult;
use crate::rng::PricerRng;

/// Monte Carlo estimator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MonteCarloPricerKind {
    /// Plain sample mean of discounted payoffs.
    #[default]
    Naive,
}

/// Naive Monte Carlo engine parameters.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::engine::NaiveMonteCarloEngine;
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder().replications(100_000).steps(1).seed(1).build().unwrap();
/// let engine = NaiveMonteCarloEngine::new(config);
/// assert_eq!(engine.config().replications(), 100_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NaiveMonteCarloEngine {
    config: MonteCarloConfig,
    pricer: MonteCarloPricerKind,
}

impl NaiveMonteCarloEngine {
    /// Creates the engine with the default estimator.
    pub fn new(config: MonteCarloConfig) -> Self {
        Self {
            config,
            pricer: MonteCarloPricerKind::default(),
        }
    }

    /// Selects the estimator.
    #[inline]
    pub fn with_pricer(mut self, pricer: MonteCarloPricerKind) -> Self {
        self.pricer = pricer;
        self
    }

    /// Simulation configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Estimator.
    #[inline]
    pub fn pricer(&self) -> MonteCarloPricerKind {
        self.pricer
    }

    /// Sets the replication count, leaving the engine unchanged on error.
    pub fn set_replications(&mut self, replications: usize) -> Result<(), ConfigError> {
        self.config.set_replications(replications)
    }

    /// Sets the step count, leaving the engine unchanged on error.
    pub fn set_steps(&mut self, steps: usize) -> Result<(), ConfigError> {
        self.config.set_steps(steps)
    }

    /// Prices `payoff` drawing variates from `rng`.
    pub fn price(
        &self,
        payoff: &Payoff,
        data: &MarketData,
        rng: &mut PricerRng,
    ) -> Result<PricingResult, PricingError> {
        match self.pricer {
            MonteCarloPricerKind::Naive => Ok(self.naive(payoff, data, rng)),
        }
    }

    fn naive(&self, payoff: &Payoff, data: &MarketData, rng: &mut PricerRng) -> PricingResult {
        let expiry = payoff.expiry();
        let spot = data.spot();
        let discount = data.discount_factor(expiry);

        let stats = if payoff.is_path_dependent() {
            let steps = self.config.steps();
            let step = GbmStep::new(data.rate(), data.dividend(), data.volatility(), expiry / steps as f64);
            run_replications(&self.config, steps + 1, rng, |rng, workspace| {
                let path = workspace.spot_mut();
                path[0] = spot;
                for k in 1..path.len() {
                    path[k] = step.advance(path[k - 1], rng.gen_normal());
                }
                payoff.evaluate_path(path)
            })
        } else {
            let step = GbmStep::new(data.rate(), data.dividend(), data.volatility(), expiry);
            run_replications(&self.config, 0, rng, |rng, _| {
                payoff.evaluate(step.advance(spot, rng.gen_normal()))
            })
        };

        PricingResult::from_statistics(&stats, discount)
    }
}
