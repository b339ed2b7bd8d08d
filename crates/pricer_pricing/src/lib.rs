//! # Pricer Pricing (Layer 3: Engines)
//!
//! Pricing engines and the option facade.
//!
//! This crate provides:
//! - [`engine::PricingEngine`]: binomial lattice, naive Monte Carlo and
//!   stochastic-variance Monte Carlo with Black-Scholes control variates
//! - [`mc`]: simulation configuration and the sequential / rayon replication
//!   runner
//! - [`rng::PricerRng`]: seeded generator with deterministic substreams
//! - [`OptionContract`]: payoff, engine and market data composed for pricing
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::market_data::MarketData;
//! use pricer_models::instruments::{Payoff, PayoffFunction};
//! use pricer_pricing::engine::{NaiveMonteCarloEngine, PricingEngine};
//! use pricer_pricing::mc::MonteCarloConfig;
//! use pricer_pricing::OptionContract;
//!
//! let data = MarketData::new(0.08, 41.0, 0.30, 0.0).unwrap();
//! let payoff = Payoff::vanilla(1.0, 40.0, PayoffFunction::Call).unwrap();
//! let config = MonteCarloConfig::builder()
//!     .replications(100_000)
//!     .steps(1)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let engine = PricingEngine::NaiveMonteCarlo(NaiveMonteCarloEngine::new(config));
//!
//! let result = OptionContract::new(&payoff, &engine, &data).price_detailed().unwrap();
//! assert!((result.price - 6.961).abs() < 4.0 * result.std_error.unwrap());
//! ```
//!
//! ## Reproducibility
//!
//! The only randomness is the [`rng::PricerRng`] each Monte Carlo call owns
//! (or is handed). Parallel runs are deterministic for a given seed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engine;
pub mod mc;
pub mod rng;

mod option;
mod result;

pub use option::OptionContract;
pub use result::PricingResult;
