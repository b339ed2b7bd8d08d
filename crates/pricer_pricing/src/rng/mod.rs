//! # Random Number Generation
//!
//! Seeded pseudo-random numbers for the Monte Carlo engines.
//!
//! - **Reproducibility**: every generator carries the seed it was built from
//! - **Substreams**: [`PricerRng::substream`] derives an independent,
//!   deterministic generator per parallel chunk
//! - **Explicit ownership**: engines receive `&mut PricerRng`; there is no
//!   global generator
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let normal_value = rng.gen_normal();
//!
//! // One independent generator per parallel chunk.
//! let base = PricerRng::from_seed(rng.next_seed());
//! let mut chunk = base.substream(0);
//! # let _ = (normal_value, chunk.gen_normal());
//! ```

mod prng;

pub use prng::PricerRng;
