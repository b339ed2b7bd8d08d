//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `pricer` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Scenario configuration could not be loaded or resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The library rejected the scenario or failed to price it.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Argument combination the selected command cannot honour.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
