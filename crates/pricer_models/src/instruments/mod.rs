//! Option payoffs.
//!
//! - [`PayoffFunction`]: the fixed library of terminal payoff functions
//! - [`Payoff`]: vanilla or exotic contract terms composed with a payoff function
//! - [`InstrumentError`]: validation errors for contract terms

pub mod error;
pub mod payoff;

pub use error::InstrumentError;
pub use payoff::{Payoff, PayoffFunction, PayoffSpec};
