//! Naive Monte Carlo tests against Black-Scholes.
//!
//! Statistical checks use a 3-standard-error band at 100 000 replications,
//! on fixed seeds.

use pricer_core::market_data::MarketData;
use pricer_core::types::PricingError;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{Payoff, PayoffFunction};
use pricer_pricing::engine::{NaiveMonteCarloEngine, PricingEngine};
use pricer_pricing::mc::MonteCarloConfig;
use pricer_pricing::rng::PricerRng;
use pricer_pricing::{OptionContract, PricingResult};

fn naive(replications: usize, steps: usize, seed: u64, parallel: bool) -> PricingEngine {
    let config = MonteCarloConfig::builder()
        .replications(replications)
        .steps(steps)
        .seed(seed)
        .parallel(parallel)
        .build()
        .unwrap();
    PricingEngine::NaiveMonteCarlo(NaiveMonteCarloEngine::new(config))
}

fn assert_within_band(result: PricingResult, analytical: f64, label: &str) {
    let tolerance = 3.0 * result.std_error.unwrap();
    let error = (result.price - analytical).abs();
    assert!(
        error < tolerance,
        "{}: MC={:.4}, Analytical={:.4}, Error={:.4}, Tolerance={:.4}",
        label,
        result.price,
        analytical,
        error,
        tolerance
    );
}

#[test]
fn test_call_matches_black_scholes_across_seeds() {
    let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
    let payoff = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();
    let analytical = BlackScholes::new(41.0, 0.08, 0.30, 0.0).unwrap().price_call(40.0, 1.0);

    for seed in [1, 7, 42, 2024] {
        let engine = naive(100_000, 1, seed, false);
        let result = OptionContract::new(&payoff, &engine, &data).price_detailed().unwrap();
        assert_within_band(result, analytical, &format!("call seed {}", seed));
    }
}

#[test]
fn test_put_with_dividend_matches_black_scholes() {
    let data = MarketData::new(0.06, 100.0, 0.2, 0.03).unwrap();
    let payoff = Payoff::vanilla(1.0, 105.0, PayoffFunction::Put).unwrap();
    let analytical = BlackScholes::new(100.0, 0.06, 0.2, 0.03).unwrap().price_put(105.0, 1.0);

    let result = naive(100_000, 1, 42, false).calculate_detailed(&payoff, &data).unwrap();
    assert_within_band(result, analytical, "put with dividend");
}

#[test]
fn test_multi_step_terminal_payoff_is_unbiased() {
    let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
    let payoff = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();
    let analytical = BlackScholes::new(41.0, 0.08, 0.30, 0.0).unwrap().price_call(40.0, 1.0);

    let result = naive(100_000, 12, 3, false).calculate_detailed(&payoff, &data).unwrap();
    assert_within_band(result, analytical, "12-step call");
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
    let payoff = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();

    for parallel in [false, true] {
        let engine = naive(20_000, 1, 99, parallel);
        let first = engine.calculate(&payoff, &data).unwrap();
        let second = engine.calculate(&payoff, &data).unwrap();
        assert_eq!(first.to_bits(), second.to_bits(), "parallel = {}", parallel);
    }
}

#[test]
fn test_parallel_agrees_with_sequential_statistically() {
    let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
    let payoff = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();
    let analytical = BlackScholes::new(41.0, 0.08, 0.30, 0.0).unwrap().price_call(40.0, 1.0);

    let result = naive(100_000, 1, 5, true).calculate_detailed(&payoff, &data).unwrap();
    assert_within_band(result, analytical, "parallel call");
}

#[test]
fn test_lookback_call_dominates_vanilla_call() {
    let data = MarketData::new(0.05, 100.0, 0.25, 0.0).unwrap();
    let vanilla = Payoff::vanilla(1.0, 100.0, PayoffFunction::Call).unwrap();
    let lookback = Payoff::exotic(1.0, 100.0, PayoffFunction::LookbackCall).unwrap();

    // One step: both payoffs see the same terminal draw.
    let engine = naive(10_000, 1, 11, false);
    let v = engine.calculate(&vanilla, &data).unwrap();
    let l = engine.calculate(&lookback, &data).unwrap();
    assert!(l >= v, "lookback {} < vanilla {}", l, v);

    let engine = naive(10_000, 52, 11, false);
    let weekly = engine.calculate(&lookback, &data).unwrap();
    assert!(weekly > v);
}

#[test]
fn test_explicit_rng_overrides_configured_seed() {
    let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
    let payoff = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();
    let engine = naive(1_000, 1, 1, false);
    let option = OptionContract::new(&payoff, &engine, &data);

    let a = option.price_with_rng(&mut PricerRng::from_seed(500)).unwrap();
    let b = option.price_with_rng(&mut PricerRng::from_seed(500)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a.price, option.price().unwrap());
}

#[test]
fn test_shared_rng_advances_between_calls() {
    let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
    let payoff = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();

    for parallel in [false, true] {
        let engine = naive(10_000, 1, 1, parallel);
        let option = OptionContract::new(&payoff, &engine, &data);
        let mut rng = PricerRng::from_seed(123);
        let first = option.price_with_rng(&mut rng).unwrap();
        let second = option.price_with_rng(&mut rng).unwrap();
        assert_ne!(first, second, "parallel = {}", parallel);
    }
}

#[test]
fn test_configuration_errors_surface_eagerly() {
    assert!(matches!(
        MonteCarloConfig::builder().replications(0).steps(1).build().map_err(PricingError::from),
        Err(PricingError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        MarketData::new(0.05, -1.0, 0.2, 0.0).map_err(PricingError::from),
        Err(PricingError::InvalidInput(_))
    ));
    assert!(matches!(
        Payoff::vanilla(0.0, 100.0, PayoffFunction::Call).map_err(PricingError::from),
        Err(PricingError::InvalidInput(_))
    ));
}
