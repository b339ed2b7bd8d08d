//! Price command implementation
//!
//! Builds market data, payoff and engine from a resolved scenario, prices
//! the option and prints one line.

use pricer_core::market_data::MarketData;
use pricer_core::types::PricingError;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::Payoff;
use pricer_pricing::OptionContract;
use tracing::info;

use crate::config::Scenario;
use crate::{CliError, Result};

/// Run the price command
pub fn run(scenario: &Scenario, compare: bool) -> Result<()> {
    let data = scenario.market_data()?;
    let payoff = scenario.payoff()?;
    let engine = scenario.engine()?;
    let reference = if compare {
        Some(reference_price(&payoff, &data)?)
    } else {
        None
    };

    info!("Starting pricing...");
    info!("  Engine: {}", engine.name());
    info!("  Payoff: {} K={} T={}", payoff.function(), payoff.strike(), payoff.expiry());
    info!(
        "  Market: S={} r={} sigma={} q={}",
        data.spot(),
        data.rate(),
        data.volatility(),
        data.dividend()
    );

    let option = OptionContract::new(&payoff, &engine, &data);
    let result = option.price_detailed()?;

    if let Some(std_error) = result.std_error {
        info!("  Standard error: {:.6}", std_error);
    }
    println!("{}", price_line(scenario, result.price));

    if let Some(reference) = reference {
        println!("The Black-Scholes reference price is {:.3}", reference);
    }

    info!("Pricing complete");
    Ok(())
}

/// Closed-form price for `--compare`; checked before any pricing output.
fn reference_price(payoff: &Payoff, data: &MarketData) -> Result<f64> {
    if payoff.is_path_dependent() {
        return Err(CliError::InvalidArgument(format!(
            "no Black-Scholes reference for path-dependent payoff '{}'",
            payoff.function()
        )));
    }
    let bs = BlackScholes::new(data.spot(), data.rate(), data.volatility(), data.dividend())
        .map_err(PricingError::from)?;
    Ok(if payoff.function().is_call() {
        bs.price_call(payoff.strike(), payoff.expiry())
    } else {
        bs.price_put(payoff.strike(), payoff.expiry())
    })
}

/// Output line for a priced scenario
pub fn price_line(scenario: &Scenario, price: f64) -> String {
    format!("The {} option price is {:.3}", scenario.payoff, price)
}
