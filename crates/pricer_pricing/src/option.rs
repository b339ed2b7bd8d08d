//! Option facade.

use pricer_core::market_data::MarketData;
use pricer_core::types::PricingError;
use pricer_models::instruments::Payoff;

use crate::engine::PricingEngine;
use crate::result::PricingResult;
use crate::rng::PricerRng;

/// A payoff, an engine and market data composed into one priceable option.
///
/// Holds borrowed references only; every call re-runs the engine.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::MarketData;
/// use pricer_models::instruments::{Payoff, PayoffFunction};
/// use pricer_pricing::engine::{BinomialEngine, PricingEngine};
/// use pricer_pricing::OptionContract;
///
/// let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
/// let payoff = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();
/// let engine = PricingEngine::Binomial(BinomialEngine::new(3).unwrap());
///
/// let option = OptionContract::new(&payoff, &engine, &data);
/// println!("The call option price is {:.3}", option.price().unwrap());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OptionContract<'a> {
    payoff: &'a Payoff,
    engine: &'a PricingEngine,
    data: &'a MarketData,
}

impl<'a> OptionContract<'a> {
    /// Composes the three parts.
    pub fn new(payoff: &'a Payoff, engine: &'a PricingEngine, data: &'a MarketData) -> Self {
        Self { payoff, engine, data }
    }

    /// The payoff.
    #[inline]
    pub fn payoff(&self) -> &'a Payoff {
        self.payoff
    }

    /// The engine.
    #[inline]
    pub fn engine(&self) -> &'a PricingEngine {
        self.engine
    }

    /// The market data.
    #[inline]
    pub fn data(&self) -> &'a MarketData {
        self.data
    }

    /// Present value.
    pub fn price(&self) -> Result<f64, PricingError> {
        self.engine.calculate(self.payoff, self.data)
    }

    /// Present value with its standard error.
    pub fn price_detailed(&self) -> Result<PricingResult, PricingError> {
        self.engine.calculate_detailed(self.payoff, self.data)
    }

    /// Present value drawing variates from `rng`.
    pub fn price_with_rng(&self, rng: &mut PricerRng) -> Result<PricingResult, PricingError> {
        self.engine.calculate_with_rng(self.payoff, self.data, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BinomialEngine;
    use pricer_models::instruments::PayoffFunction;

    #[test]
    fn test_price_delegates_to_engine() {
        let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
        let payoff = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();
        let engine = PricingEngine::Binomial(BinomialEngine::new(3).unwrap());
        let option = OptionContract::new(&payoff, &engine, &data);

        assert_eq!(option.price().unwrap(), engine.calculate(&payoff, &data).unwrap());
        assert_eq!(option.price().unwrap(), option.price().unwrap());
        assert_eq!(option.price_detailed().unwrap().std_error, None);
        assert_eq!(option.payoff(), &payoff);
    }
}
