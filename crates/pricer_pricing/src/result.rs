//! Pricing results.

use pricer_core::math::SampleStatistics;
use pricer_core::types::PricingError;

/// Price estimate with its Monte Carlo standard error.
///
/// Lattice prices are exact for the given step count and carry no standard
/// error.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::PricingResult;
///
/// let result = PricingResult::with_std_error(10.5, 0.05);
/// assert_eq!(result.confidence_95(), Some(1.96 * 0.05));
/// assert_eq!(PricingResult::exact(7.0).confidence_95(), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PricingResult {
    /// Present value of the option.
    pub price: f64,
    /// Standard error of the price estimate (Monte Carlo only).
    pub std_error: Option<f64>,
}

impl PricingResult {
    /// Deterministic price.
    #[inline]
    pub fn exact(price: f64) -> Self {
        Self {
            price,
            std_error: None,
        }
    }

    /// Sampled price with standard error.
    #[inline]
    pub fn with_std_error(price: f64, std_error: f64) -> Self {
        Self {
            price,
            std_error: Some(std_error),
        }
    }

    /// Discounts the mean of undiscounted replication values.
    #[inline]
    pub fn from_statistics(stats: &SampleStatistics, discount: f64) -> Self {
        Self::with_std_error(discount * stats.mean(), discount * stats.std_error())
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> Option<f64> {
        self.std_error.map(|se| 1.96 * se)
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> Option<f64> {
        self.std_error.map(|se| 2.576 * se)
    }

    /// Rejects a non-finite price.
    pub(crate) fn ensure_finite(self, engine: &str) -> Result<Self, PricingError> {
        if self.price.is_finite() {
            Ok(self)
        } else {
            Err(PricingError::NumericalInstability(format!(
                "{} engine produced a non-finite price ({})",
                engine, self.price
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_statistics_discounts_mean_and_error() {
        let stats: SampleStatistics = [1.0, 2.0, 3.0, 4.0].into_iter().collect();
        let result = PricingResult::from_statistics(&stats, 0.5);
        assert_relative_eq!(result.price, 1.25, epsilon = 1e-15);
        assert_relative_eq!(result.std_error.unwrap(), 0.5 * stats.std_error(), epsilon = 1e-15);
    }

    #[test]
    fn test_confidence_intervals() {
        let result = PricingResult::with_std_error(1.0, 0.1);
        assert_relative_eq!(result.confidence_95().unwrap(), 0.196, epsilon = 1e-12);
        assert_relative_eq!(result.confidence_99().unwrap(), 0.2576, epsilon = 1e-12);
    }

    #[test]
    fn test_ensure_finite() {
        assert!(PricingResult::exact(1.0).ensure_finite("binomial").is_ok());
        let err = PricingResult::exact(f64::NAN).ensure_finite("binomial").unwrap_err();
        assert!(matches!(err, PricingError::NumericalInstability(_)));
    }
}
