//! # Pricer Models (L2: Business Logic)
//!
//! Payoffs, closed-form analytics and stochastic dynamics.
//!
//! This crate provides:
//! - Payoff definitions: vanilla and lookback payoff functions behind a
//!   closed [`Payoff`](instruments::Payoff) enum
//! - Black-Scholes prices and sensitivities with continuous dividend yield
//! - Single-step dynamics for geometric Brownian motion and the
//!   mean-reverting stochastic variance process
//!
//! ## Design Principles
//!
//! - **Enum-based payoffs** for static dispatch; the payoff function is a
//!   selector over a fixed library rather than an injected callback
//! - **Eager validation**: invalid contract terms are rejected at construction

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
