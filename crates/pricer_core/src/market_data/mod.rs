//! Market data for a single pricing request.
//!
//! # Components
//!
//! - [`snapshot`]: The immutable (spot, rate, volatility, dividend) bundle
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::MarketData;
//!
//! let data = MarketData::new(0.05, 100.0, 0.2, 0.0).unwrap();
//! let df = data.discount_factor(1.0);
//! assert!((df - 0.951229).abs() < 1e-5);
//! ```

pub mod error;
pub mod snapshot;

pub use error::MarketDataError;
pub use snapshot::MarketData;
