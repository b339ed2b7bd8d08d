//! CLI command implementations
//!
//! Every pricing subcommand resolves a scenario and hands it to [`price`].

pub mod price;
