//! Pricing engines.
//!
//! [`PricingEngine`] is a closed enum over the three algorithms. Each variant
//! carries its own parameters and the estimator it runs:
//!
//! | Variant | Parameters | Algorithm |
//! |---------|------------|-----------|
//! | `Binomial` | steps | closed-form lattice expectation |
//! | `NaiveMonteCarlo` | [`MonteCarloConfig`] | GBM sample mean |
//! | `ControlVariateMonteCarlo` | [`MonteCarloConfig`], variance parameters | stochastic variance with BS control variates |
//!
//! All entry points borrow the engine immutably; reconfiguration goes
//! through the validating setters between calls.

mod binomial;
mod control_variate;
mod naive;

pub use binomial::{BinomialEngine, BinomialPricer};
pub use control_variate::{
    ControlVariateEngine, ControlVariatePricer, ControlVariates, SimulatedPath,
};
pub use naive::{MonteCarloPricerKind, NaiveMonteCarloEngine};

use pricer_core::market_data::MarketData;
use pricer_core::types::PricingError;
use pricer_models::instruments::Payoff;
use tracing::debug;

use crate::mc::MonteCarloConfig;
use crate::result::PricingResult;
use crate::rng::PricerRng;

/// Pricing engine selected by the caller.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::MarketData;
/// use pricer_models::instruments::{Payoff, PayoffFunction};
/// use pricer_pricing::engine::{BinomialEngine, PricingEngine};
///
/// let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
/// let payoff = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();
/// let engine = PricingEngine::Binomial(BinomialEngine::new(3).unwrap());
///
/// let price = engine.calculate(&payoff, &data).unwrap();
/// assert!((price - 7.0739).abs() < 1e-4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum PricingEngine {
    /// Binomial lattice.
    Binomial(BinomialEngine),
    /// Monte Carlo under geometric Brownian motion.
    NaiveMonteCarlo(NaiveMonteCarloEngine),
    /// Monte Carlo under stochastic variance with control variates.
    ControlVariateMonteCarlo(ControlVariateEngine),
}

impl PricingEngine {
    /// Short engine name for logs and messages.
    pub fn name(&self) -> &'static str {
        match self {
            PricingEngine::Binomial(_) => "binomial",
            PricingEngine::NaiveMonteCarlo(_) => "naive-mc",
            PricingEngine::ControlVariateMonteCarlo(_) => "control-variate",
        }
    }

    /// Simulation configuration of the Monte Carlo variants.
    pub fn monte_carlo_config(&self) -> Option<&MonteCarloConfig> {
        match self {
            PricingEngine::Binomial(_) => None,
            PricingEngine::NaiveMonteCarlo(engine) => Some(engine.config()),
            PricingEngine::ControlVariateMonteCarlo(engine) => Some(engine.config()),
        }
    }

    /// Prices `payoff` and returns the scalar price.
    ///
    /// Monte Carlo variants seed their generator from the configured seed,
    /// or from the operating system when none is set.
    pub fn calculate(&self, payoff: &Payoff, data: &MarketData) -> Result<f64, PricingError> {
        self.calculate_detailed(payoff, data).map(|result| result.price)
    }

    /// Prices `payoff` and returns the price with its standard error.
    pub fn calculate_detailed(&self, payoff: &Payoff, data: &MarketData) -> Result<PricingResult, PricingError> {
        let mut rng = match self.monte_carlo_config().and_then(MonteCarloConfig::seed) {
            Some(seed) => PricerRng::from_seed(seed),
            None => PricerRng::from_entropy(),
        };
        self.calculate_with_rng(payoff, data, &mut rng)
    }

    /// Prices `payoff` drawing every variate from `rng`.
    ///
    /// The configured seed is ignored. The lattice never touches `rng`.
    ///
    /// # Errors
    /// - `PricingError::UnsupportedPayoff` for path-dependent payoffs on the lattice
    /// - `PricingError::NumericalInstability` if the price is not finite
    pub fn calculate_with_rng(
        &self,
        payoff: &Payoff,
        data: &MarketData,
        rng: &mut PricerRng,
    ) -> Result<PricingResult, PricingError> {
        let result = match self {
            PricingEngine::Binomial(engine) => {
                debug!(engine = self.name(), steps = engine.steps(), "calculate");
                engine.price(payoff, data)?
            }
            PricingEngine::NaiveMonteCarlo(engine) => {
                let config = engine.config();
                debug!(
                    engine = self.name(),
                    replications = config.replications(),
                    steps = config.steps(),
                    parallel = config.parallel(),
                    seed = rng.seed(),
                    "calculate"
                );
                engine.price(payoff, data, rng)?
            }
            PricingEngine::ControlVariateMonteCarlo(engine) => {
                let config = engine.config();
                debug!(
                    engine = self.name(),
                    replications = config.replications(),
                    steps = config.steps(),
                    parallel = config.parallel(),
                    seed = rng.seed(),
                    pricer = ?engine.pricer(),
                    "calculate"
                );
                engine.price(payoff, data, rng)?
            }
        };

        result.ensure_finite(self.name())
    }
}

impl From<BinomialEngine> for PricingEngine {
    fn from(engine: BinomialEngine) -> Self {
        PricingEngine::Binomial(engine)
    }
}

impl From<NaiveMonteCarloEngine> for PricingEngine {
    fn from(engine: NaiveMonteCarloEngine) -> Self {
        PricingEngine::NaiveMonteCarlo(engine)
    }
}

impl From<ControlVariateEngine> for PricingEngine {
    fn from(engine: ControlVariateEngine) -> Self {
        PricingEngine::ControlVariateMonteCarlo(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::PayoffFunction;

    fn naive(seed: Option<u64>) -> PricingEngine {
        let mut builder = MonteCarloConfig::builder().replications(1_000).steps(1);
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        NaiveMonteCarloEngine::new(builder.build().unwrap()).into()
    }

    #[test]
    fn test_seeded_calculate_is_reproducible() {
        let data = MarketData::new(0.05, 100.0, 0.2, 0.0).unwrap();
        let payoff = Payoff::vanilla(1.0, 100.0, PayoffFunction::Call).unwrap();
        let engine = naive(Some(42));
        assert_eq!(
            engine.calculate(&payoff, &data).unwrap(),
            engine.calculate(&payoff, &data).unwrap()
        );
    }

    #[test]
    fn test_calculate_matches_explicit_rng() {
        let data = MarketData::new(0.05, 100.0, 0.2, 0.0).unwrap();
        let payoff = Payoff::vanilla(1.0, 100.0, PayoffFunction::Call).unwrap();
        let engine = naive(Some(42));
        let explicit = engine
            .calculate_with_rng(&payoff, &data, &mut PricerRng::from_seed(42))
            .unwrap();
        assert_eq!(engine.calculate_detailed(&payoff, &data).unwrap(), explicit);
    }

    #[test]
    fn test_unseeded_calculate_runs() {
        let data = MarketData::new(0.05, 100.0, 0.2, 0.0).unwrap();
        let payoff = Payoff::vanilla(1.0, 100.0, PayoffFunction::Call).unwrap();
        let price = naive(None).calculate(&payoff, &data).unwrap();
        assert!(price > 0.0);
    }

    #[test]
    fn test_names_and_config_access() {
        let binomial: PricingEngine = BinomialEngine::new(3).unwrap().into();
        assert_eq!(binomial.name(), "binomial");
        assert!(binomial.monte_carlo_config().is_none());
        assert_eq!(naive(Some(1)).monte_carlo_config().and_then(|c| c.seed()), Some(1));
    }
}
