//! Monte Carlo simulation infrastructure.
//!
//! Shared by the naive and control-variate engines:
//!
//! ```text
//! engine
//! ├── MonteCarloConfig   (replications, steps, seed, parallel)
//! ├── PricerRng          (explicit random source)
//! └── run_replications   (sequential loop or rayon chunk fan-out)
//!     └── PathWorkspace  (per-run / per-chunk path buffers)
//! ```
//!
//! The engines own the per-replication algorithm; this module owns how many
//! replications run, where they run and how their values are aggregated.

mod config;
mod error;
mod parallel;
mod workspace;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_REPLICATIONS, MAX_STEPS};
pub use error::ConfigError;
pub use parallel::{run_replications, CHUNK_SIZE};
pub use workspace::PathWorkspace;

pub(crate) use config::validate_steps;
