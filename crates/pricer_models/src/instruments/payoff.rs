//! Payoff definitions.
//!
//! A [`Payoff`] pairs contract terms (expiry, strike) with one function from
//! the fixed [`PayoffFunction`] library. The two variants share one layout
//! and differ in the input they are meant for: [`Payoff::Vanilla`] is priced
//! off the terminal spot, [`Payoff::Exotic`] off the whole simulated path.
//!
//! # Payoff library
//!
//! | Function | Value |
//! |----------|-------|
//! | `Call` | max(S_T - K, 0) |
//! | `Put` | max(K - S_T, 0) |
//! | `LookbackCall` | max(max_t S_t - K, 0) |
//! | `LookbackPut` | max(K - min_t S_t, 0) |

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// Terminal payoff function, selected by the caller.
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffFunction;
///
/// assert_eq!(PayoffFunction::Call.evaluate(40.0, 45.0), 5.0);
/// assert_eq!(PayoffFunction::LookbackCall.evaluate_path(40.0, &[41.0, 47.0, 39.0]), 7.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PayoffFunction {
    /// European call: max(S - K, 0)
    Call,
    /// European put: max(K - S, 0)
    Put,
    /// Fixed-strike lookback call on the path maximum
    LookbackCall,
    /// Fixed-strike lookback put on the path minimum
    LookbackPut,
}

impl PayoffFunction {
    /// True when the value depends on more than the terminal spot.
    #[inline]
    pub fn is_path_dependent(&self) -> bool {
        matches!(self, PayoffFunction::LookbackCall | PayoffFunction::LookbackPut)
    }

    /// True for call-sense payoffs (value increases with the underlying).
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, PayoffFunction::Call | PayoffFunction::LookbackCall)
    }

    /// Short name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            PayoffFunction::Call => "call",
            PayoffFunction::Put => "put",
            PayoffFunction::LookbackCall => "lookback-call",
            PayoffFunction::LookbackPut => "lookback-put",
        }
    }

    /// Evaluates the payoff on a single spot value.
    ///
    /// For lookbacks a scalar is a one-point path, so the extremum is the spot.
    #[inline]
    pub fn evaluate(&self, strike: f64, spot: f64) -> f64 {
        if self.is_call() {
            (spot - strike).max(0.0)
        } else {
            (strike - spot).max(0.0)
        }
    }

    /// Evaluates the payoff on a full price path.
    ///
    /// Vanilla functions read the last element. An empty path pays nothing.
    pub fn evaluate_path(&self, strike: f64, path: &[f64]) -> f64 {
        let Some(&terminal) = path.last() else {
            return 0.0;
        };

        match self {
            PayoffFunction::Call | PayoffFunction::Put => self.evaluate(strike, terminal),
            PayoffFunction::LookbackCall => {
                let maximum = path.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                (maximum - strike).max(0.0)
            }
            PayoffFunction::LookbackPut => {
                let minimum = path.iter().copied().fold(f64::INFINITY, f64::min);
                (strike - minimum).max(0.0)
            }
        }
    }
}

impl fmt::Display for PayoffFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PayoffFunction {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "call" => Ok(PayoffFunction::Call),
            "put" => Ok(PayoffFunction::Put),
            "lookback-call" => Ok(PayoffFunction::LookbackCall),
            "lookback-put" => Ok(PayoffFunction::LookbackPut),
            _ => Err(InstrumentError::UnknownFunction(s.to_string())),
        }
    }
}

/// Contract terms shared by every payoff variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoffSpec {
    expiry: f64,
    strike: f64,
    function: PayoffFunction,
}

impl PayoffSpec {
    /// Validates and creates contract terms.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidExpiry` if expiry <= 0 or not finite
    /// - `InstrumentError::InvalidStrike` if strike < 0 or not finite
    pub fn new(expiry: f64, strike: f64, function: PayoffFunction) -> Result<Self, InstrumentError> {
        if !(expiry.is_finite() && expiry > 0.0) {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }
        if !(strike.is_finite() && strike >= 0.0) {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        Ok(Self {
            expiry,
            strike,
            function,
        })
    }

    /// Time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// The payoff function.
    #[inline]
    pub fn function(&self) -> PayoffFunction {
        self.function
    }
}

/// Option payoff: contract terms plus the payoff function they compose with.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{Payoff, PayoffFunction};
///
/// let call = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();
/// assert_eq!(call.evaluate(45.0), 5.0);
///
/// let lookback = Payoff::exotic(1.0, 100.0, PayoffFunction::LookbackCall).unwrap();
/// assert_eq!(lookback.evaluate_path(&[100.0, 112.0, 104.0]), 12.0);
///
/// assert!(Payoff::vanilla(0.0, 40.0, PayoffFunction::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payoff {
    /// Terminal-value payoff.
    Vanilla(PayoffSpec),
    /// Path-dependent payoff.
    Exotic(PayoffSpec),
}

impl Payoff {
    /// Creates a vanilla payoff.
    ///
    /// # Errors
    /// Invalid terms, or a path-dependent `function`.
    pub fn vanilla(expiry: f64, strike: f64, function: PayoffFunction) -> Result<Self, InstrumentError> {
        if function.is_path_dependent() {
            return Err(InstrumentError::PathDependentVanilla {
                function: function.name(),
            });
        }
        Ok(Payoff::Vanilla(PayoffSpec::new(expiry, strike, function)?))
    }

    /// Creates an exotic (path-evaluated) payoff.
    ///
    /// # Errors
    /// Invalid terms.
    pub fn exotic(expiry: f64, strike: f64, function: PayoffFunction) -> Result<Self, InstrumentError> {
        Ok(Payoff::Exotic(PayoffSpec::new(expiry, strike, function)?))
    }

    /// Contract terms.
    #[inline]
    pub fn spec(&self) -> &PayoffSpec {
        match self {
            Payoff::Vanilla(spec) | Payoff::Exotic(spec) => spec,
        }
    }

    /// Time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.spec().expiry()
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.spec().strike()
    }

    /// The payoff function.
    #[inline]
    pub fn function(&self) -> PayoffFunction {
        self.spec().function()
    }

    /// True when pricing needs the full path rather than the terminal spot.
    #[inline]
    pub fn is_path_dependent(&self) -> bool {
        self.function().is_path_dependent()
    }

    /// Payoff of a terminal spot value.
    #[inline]
    pub fn evaluate(&self, spot: f64) -> f64 {
        self.function().evaluate(self.strike(), spot)
    }

    /// Payoff of a full price path.
    #[inline]
    pub fn evaluate_path(&self, path: &[f64]) -> f64 {
        self.function().evaluate_path(self.strike(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_vanilla_payoffs() {
        assert_eq!(PayoffFunction::Call.evaluate(100.0, 110.0), 10.0);
        assert_eq!(PayoffFunction::Call.evaluate(100.0, 90.0), 0.0);
        assert_eq!(PayoffFunction::Put.evaluate(100.0, 90.0), 10.0);
        assert_eq!(PayoffFunction::Put.evaluate(100.0, 110.0), 0.0);
    }

    #[test]
    fn test_vanilla_on_path_uses_terminal() {
        let path = [100.0, 130.0, 95.0];
        assert_eq!(PayoffFunction::Call.evaluate_path(100.0, &path), 0.0);
        assert_eq!(PayoffFunction::Put.evaluate_path(100.0, &path), 5.0);
    }

    #[test]
    fn test_lookback_payoffs() {
        let path = [100.0, 130.0, 80.0, 95.0];
        assert_eq!(PayoffFunction::LookbackCall.evaluate_path(100.0, &path), 30.0);
        assert_eq!(PayoffFunction::LookbackPut.evaluate_path(100.0, &path), 20.0);
    }

    #[test]
    fn test_empty_path_pays_nothing() {
        assert_eq!(PayoffFunction::LookbackCall.evaluate_path(0.0, &[]), 0.0);
    }

    #[test]
    fn test_from_str_round_trip() {
        for f in [
            PayoffFunction::Call,
            PayoffFunction::Put,
            PayoffFunction::LookbackCall,
            PayoffFunction::LookbackPut,
        ] {
            assert_eq!(f.name().parse::<PayoffFunction>().unwrap(), f);
        }
        assert_eq!(
            "LOOKBACK_CALL".parse::<PayoffFunction>().unwrap(),
            PayoffFunction::LookbackCall
        );
        assert!("digital".parse::<PayoffFunction>().is_err());
    }

    #[test]
    fn test_payoff_validation() {
        assert_eq!(
            Payoff::vanilla(-1.0, 40.0, PayoffFunction::Call),
            Err(InstrumentError::InvalidExpiry { expiry: -1.0 })
        );
        assert_eq!(
            Payoff::exotic(1.0, -40.0, PayoffFunction::LookbackCall),
            Err(InstrumentError::InvalidStrike { strike: -40.0 })
        );
        assert!(matches!(
            Payoff::vanilla(1.0, 40.0, PayoffFunction::LookbackPut),
            Err(InstrumentError::PathDependentVanilla { .. })
        ));
        assert!(Payoff::exotic(1.0, 0.0, PayoffFunction::Call).is_ok());
    }

    #[test]
    fn test_accessors() {
        let payoff = Payoff::exotic(2.0, 95.0, PayoffFunction::LookbackPut).unwrap();
        assert_eq!(payoff.expiry(), 2.0);
        assert_eq!(payoff.strike(), 95.0);
        assert_eq!(payoff.function(), PayoffFunction::LookbackPut);
        assert!(payoff.is_path_dependent());
        assert!(!Payoff::vanilla(1.0, 1.0, PayoffFunction::Put).unwrap().is_path_dependent());
    }

    proptest! {
        #[test]
        fn prop_lookback_dominates_vanilla(
            strike in 0.0f64..200.0,
            path in prop::collection::vec(1.0f64..300.0, 1..50),
        ) {
            let call = PayoffFunction::Call.evaluate_path(strike, &path);
            let lookback_call = PayoffFunction::LookbackCall.evaluate_path(strike, &path);
            prop_assert!(lookback_call >= call);
            prop_assert!(call >= 0.0);

            let put = PayoffFunction::Put.evaluate_path(strike, &path);
            let lookback_put = PayoffFunction::LookbackPut.evaluate_path(strike, &path);
            prop_assert!(lookback_put >= put);
        }
    }
}
