//! Instrument validation errors.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Contract term validation errors.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidExpiry { expiry: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid expiry: T = 0 (must be positive)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Expiry is not strictly positive.
    #[error("Invalid expiry: T = {expiry} (must be positive)")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Strike is negative.
    #[error("Invalid strike: K = {strike} (must be non-negative)")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// A vanilla payoff was composed with a path-dependent function.
    #[error("Vanilla payoff cannot use path-dependent function '{function}'")]
    PathDependentVanilla {
        /// Name of the rejected payoff function
        function: &'static str,
    },

    /// Payoff function name not in the library.
    #[error("Unknown payoff function: {0}")]
    UnknownFunction(String),
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
