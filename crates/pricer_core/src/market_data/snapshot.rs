//! Flat market data snapshot.

use super::error::MarketDataError;

/// Market data consumed by every pricing engine.
///
/// All quantities are continuously compounded and annualised. The snapshot is
/// a plain value: it has no identity beyond its fields and cannot be mutated
/// after construction.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketData;
///
/// let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
/// assert_eq!(data.rate(), 0.08);
/// assert!(MarketData::new(0.08, -41.0, 0.30, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMarketData"))]
pub struct MarketData {
    rate: f64,
    spot: f64,
    volatility: f64,
    dividend: f64,
}

impl MarketData {
    /// Creates a validated market data snapshot.
    ///
    /// # Arguments
    ///
    /// * `rate` - Risk-free rate (any finite value)
    /// * `spot` - Spot price of the underlying (> 0)
    /// * `volatility` - Lognormal volatility (>= 0)
    /// * `dividend` - Continuous dividend yield (>= 0)
    ///
    /// # Errors
    ///
    /// Returns the first [`MarketDataError`] encountered.
    pub fn new(rate: f64, spot: f64, volatility: f64, dividend: f64) -> Result<Self, MarketDataError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(MarketDataError::InvalidSpot { spot });
        }
        if !rate.is_finite() {
            return Err(MarketDataError::InvalidRate { rate });
        }
        if !(volatility.is_finite() && volatility >= 0.0) {
            return Err(MarketDataError::InvalidVolatility { volatility });
        }
        if !(dividend.is_finite() && dividend >= 0.0) {
            return Err(MarketDataError::InvalidDividend { dividend });
        }

        Ok(Self {
            rate,
            spot,
            volatility,
            dividend,
        })
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
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

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend(&self) -> f64 {
        self.dividend
    }

    /// Cost of carry `r - q`.
    #[inline]
    pub fn carry(&self) -> f64 {
        self.rate - self.dividend
    }

    /// Discount factor `exp(-r·t)`.
    #[inline]
    pub fn discount_factor(&self, t: f64) -> f64 {
        (-self.rate * t).exp()
    }

    /// Forward price `S·exp((r - q)·t)`.
    #[inline]
    pub fn forward(&self, t: f64) -> f64 {
        self.spot * (self.carry() * t).exp()
    }
}

/// Unvalidated field set; deserialisation goes through [`MarketData::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMarketData {
    rate: f64,
    spot: f64,
    volatility: f64,
    #[serde(default)]
    dividend: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMarketData> for MarketData {
    type Error = MarketDataError;

    fn try_from(raw: RawMarketData) -> Result<Self, Self::Error> {
        MarketData::new(raw.rate, raw.spot, raw.volatility, raw.dividend)
    }
}
