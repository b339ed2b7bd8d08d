//! Error types for Monte Carlo and lattice engine configuration.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for the pricing engines.
///
/// These errors occur during construction or through a validating setter
/// when invalid parameters are provided.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Replication count outside valid range [1, 10_000_000].
    #[error("Invalid replication count {0}: must be in range [1, 10_000_000]")]
    InvalidReplicationCount(usize),

    /// Step count outside valid range [1, 10_000].
    #[error("Invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidConfiguration(err.to_string())
    }
}
