//! Pricer CLI - command-line driver for the option pricing engines
//!
//! # Commands
//!
//! - `pricer binomial` - Binomial lattice (defaults: S=41, K=40, r=8%, σ=30%, 3 steps)
//! - `pricer naive-mc` - Monte Carlo under GBM (defaults: 100 000 replications)
//! - `pricer control-variate` - Stochastic variance Monte Carlo with control
//!   variates (defaults: lookback call, S=K=100, 2 steps, 5 replications)
//!
//! Every scenario field can also come from a TOML file (`--config`) or a
//! `PRICER_*` environment variable; flags take precedence.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::{EngineKind, LogLevel, Scenario, ScenarioOverrides};
pub use error::{CliError, Result};

/// Option pricer CLI
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML scenario file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price with the binomial lattice
    Binomial(ScenarioArgs),

    /// Price with naive Monte Carlo under geometric Brownian motion
    NaiveMc(ScenarioArgs),

    /// Price with stochastic-variance Monte Carlo and control variates
    ControlVariate(ScenarioArgs),
}

/// Scenario flags shared by every pricing command
#[derive(Args, Debug, Default)]
struct ScenarioArgs {
    /// Spot price of the underlying
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Continuously compounded risk-free rate
    #[arg(long)]
    rate: Option<f64>,

    /// Lognormal volatility
    #[arg(long)]
    volatility: Option<f64>,

    /// Continuous dividend yield
    #[arg(long)]
    dividend: Option<f64>,

    /// Time to expiry in years
    #[arg(long)]
    expiry: Option<f64>,

    /// Payoff function (call, put, lookback-call, lookback-put)
    #[arg(long)]
    payoff: Option<String>,

    /// Lattice steps or simulation grid size
    #[arg(long)]
    steps: Option<usize>,

    /// Monte Carlo replications
    #[arg(long)]
    replications: Option<usize>,

    /// Monte Carlo seed
    #[arg(long)]
    seed: Option<u64>,

    /// Run replications on all cores
    #[arg(long)]
    parallel: bool,

    /// Subtract the control variates from each replication
    #[arg(long)]
    corrected: bool,

    /// Variance mean-reversion speed
    #[arg(long)]
    alpha: Option<f64>,

    /// Long-run variance
    #[arg(long)]
    vbar: Option<f64>,

    /// Vol-of-vol
    #[arg(long)]
    xi: Option<f64>,

    /// Also print the Black-Scholes price
    #[arg(long)]
    compare: bool,
}

impl ScenarioArgs {
    fn overrides(&self, log_level: Option<String>) -> ScenarioOverrides {
        ScenarioOverrides {
            log_level,
            spot: self.spot,
            strike: self.strike,
            rate: self.rate,
            volatility: self.volatility,
            dividend: self.dividend,
            expiry: self.expiry,
            payoff: self.payoff.clone(),
            steps: self.steps,
            replications: self.replications,
            seed: self.seed,
            parallel: self.parallel.then_some(true),
            corrected: self.corrected.then_some(true),
            alpha: self.alpha,
            vbar: self.vbar,
            xi: self.xi,
        }
    }
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (kind, args) = match &cli.command {
        Commands::Binomial(args) => (EngineKind::Binomial, args),
        Commands::NaiveMc(args) => (EngineKind::NaiveMonteCarlo, args),
        Commands::ControlVariate(args) => (EngineKind::ControlVariate, args),
    };

    let file = match &cli.config {
        Some(path) => ScenarioOverrides::from_file(path)?,
        None => ScenarioOverrides::default(),
    };
    let env = ScenarioOverrides::from_env()?;
    let merged = args.overrides(cli.log_level.clone()).over(env.over(file));
    let scenario = Scenario::resolve(kind, merged)?;

    init_tracing(scenario.log_level);
    debug!(?scenario, "resolved scenario");

    commands::price::run(&scenario, args.compare)
}
