//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths.

use approx::assert_relative_eq;

#[test]
fn test_market_data_module_exports() {
    use pricer_core::market_data::MarketData;
    use pricer_core::market_data::MarketDataError;

    let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
    assert_eq!(data.spot(), 41.0);

    let err: MarketDataError = MarketData::new(0.08, 41.0, -0.30, 0.0).unwrap_err();
    assert!(err.to_string().contains("volatility"));
}

#[test]
fn test_math_module_exports() {
    use pricer_core::math::{binomial_pmf, ln_binomial_pmf, SampleStatistics};

    assert_relative_eq!(binomial_pmf(2, 4, 0.5), 0.375, epsilon = 1e-12);
    assert_relative_eq!(ln_binomial_pmf(0, 3, 0.5), (0.125_f64).ln(), epsilon = 1e-12);

    let stats: SampleStatistics = [2.0, 4.0].into_iter().collect();
    assert_eq!(stats.mean(), 3.0);
}

#[test]
fn test_types_module_exports() {
    use pricer_core::market_data::MarketDataError;
    use pricer_core::types::error::PricingError as ErrorPath;
    use pricer_core::types::PricingError;

    let err: PricingError = MarketDataError::InvalidSpot { spot: -1.0 }.into();
    let same: ErrorPath = err.clone();
    assert_eq!(err, same);
    assert!(err.is_configuration());
}
