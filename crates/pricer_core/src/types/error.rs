//! Error types for structured error handling.
//!
//! [`PricingError`] is the single error surfaced to callers of the pricing
//! layer. Layer-local errors (market data, instruments, analytics, engine
//! configuration) convert into it through `From` implementations that live
//! next to their definitions.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Configuration mistakes are reported eagerly, at construction or at the
/// start of a pricing call, and are never retried. Numerical degeneracies with
/// a defined fallback (zero volatility in a lattice, negative variance in a
/// discretised path) are handled where they occur and do not appear here.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or contract terms
/// - `InvalidConfiguration`: Invalid engine parameters
/// - `UnsupportedPayoff`: Payoff shape the selected engine cannot price
/// - `NumericalInstability`: A non-finite value escaped a computation
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("spot must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: spot must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid market data or contract terms.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid engine configuration (steps, replications, model parameters).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The engine cannot evaluate this kind of payoff.
    #[error("Unsupported payoff: {0}")]
    UnsupportedPayoff(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Returns true for errors caused by caller-supplied parameters.
    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PricingError::InvalidInput(_) | PricingError::InvalidConfiguration(_)
        )
    }
}
