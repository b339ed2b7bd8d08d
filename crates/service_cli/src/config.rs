//! Scenario configuration management
//!
//! A scenario is resolved from four layers, highest precedence first:
//! 1. CLI arguments
//! 2. `PRICER_*` environment variables
//! 3. TOML scenario file (`--config`)
//! 4. Per-command defaults
//!
//! Every layer is a [`ScenarioOverrides`] whose unset fields fall through to
//! the next one.

use pricer_core::market_data::MarketData;
use pricer_core::types::PricingError;
use pricer_models::instruments::{Payoff, PayoffFunction};
use pricer_models::models::StochasticVarianceParams;
use pricer_pricing::engine::{
    BinomialEngine, ControlVariateEngine, ControlVariatePricer, NaiveMonteCarloEngine, PricingEngine,
};
use pricer_pricing::mc::MonteCarloConfig;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid payoff: {0}")]
    InvalidPayoff(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Engine selected by the subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Binomial,
    NaiveMonteCarlo,
    ControlVariate,
}

/// One configuration layer; `None` falls through to the layer below
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioOverrides {
    pub log_level: Option<String>,
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
    pub dividend: Option<f64>,
    pub expiry: Option<f64>,
    pub payoff: Option<String>,
    pub steps: Option<usize>,
    pub replications: Option<usize>,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
    pub corrected: Option<bool>,
    pub alpha: Option<f64>,
    pub vbar: Option<f64>,
    pub xi: Option<f64>,
}

macro_rules! layer_fields {
    ($high:expr, $low:expr, $($field:ident),+) => {
        ScenarioOverrides { $($field: $high.$field.or($low.$field)),+ }
    };
}

impl ScenarioOverrides {
    /// Load a layer from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load a layer from `PRICER_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load a layer from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse<T: FromStr>(lookup: &dyn Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, ConfigError> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map(Some)
                    .map_err(|_| ConfigError::EnvError(format!("{} has invalid value '{}'", key, raw))),
                None => Ok(None),
            }
        }

        let lookup: &dyn Fn(&str) -> Option<String> = &lookup;
        Ok(Self {
            log_level: lookup("PRICER_LOG_LEVEL"),
            spot: parse(lookup, "PRICER_SPOT")?,
            strike: parse(lookup, "PRICER_STRIKE")?,
            rate: parse(lookup, "PRICER_RATE")?,
            volatility: parse(lookup, "PRICER_VOLATILITY")?,
            dividend: parse(lookup, "PRICER_DIVIDEND")?,
            expiry: parse(lookup, "PRICER_EXPIRY")?,
            payoff: lookup("PRICER_PAYOFF"),
            steps: parse(lookup, "PRICER_STEPS")?,
            replications: parse(lookup, "PRICER_REPLICATIONS")?,
            seed: parse(lookup, "PRICER_SEED")?,
            parallel: parse(lookup, "PRICER_PARALLEL")?,
            corrected: parse(lookup, "PRICER_CORRECTED")?,
            alpha: parse(lookup, "PRICER_ALPHA")?,
            vbar: parse(lookup, "PRICER_VBAR")?,
            xi: parse(lookup, "PRICER_XI")?,
        })
    }

    /// Lay `self` over `lower`; fields set in `self` win
    pub fn over(self, lower: ScenarioOverrides) -> ScenarioOverrides {
        layer_fields!(
            self, lower, log_level, spot, strike, rate, volatility, dividend, expiry, payoff, steps,
            replications, seed, parallel, corrected, alpha, vbar, xi
        )
    }
}

/// Fully resolved scenario
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub kind: EngineKind,
    pub log_level: LogLevel,
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub volatility: f64,
    pub dividend: f64,
    pub expiry: f64,
    pub payoff: PayoffFunction,
    pub steps: usize,
    pub replications: usize,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub corrected: bool,
    pub alpha: f64,
    pub vbar: f64,
    pub xi: f64,
}

impl Scenario {
    /// Defaults reproducing the reference run of each engine
    pub fn defaults(kind: EngineKind) -> Self {
        let hull = Self {
            kind,
            log_level: LogLevel::default(),
            spot: 41.0,
            strike: 40.0,
            rate: 0.08,
            volatility: 0.30,
            dividend: 0.0,
            expiry: 1.0,
            payoff: PayoffFunction::Call,
            steps: 3,
            replications: 1,
            seed: None,
            parallel: false,
            corrected: false,
            alpha: 5.0,
            vbar: 0.02,
            xi: 52.0,
        };

        match kind {
            EngineKind::Binomial => hull,
            EngineKind::NaiveMonteCarlo => Self {
                steps: 1,
                replications: 100_000,
                ..hull
            },
            EngineKind::ControlVariate => Self {
                spot: 100.0,
                strike: 100.0,
                rate: 0.06,
                volatility: 0.20,
                dividend: 0.03,
                payoff: PayoffFunction::LookbackCall,
                steps: 2,
                replications: 5,
                ..hull
            },
        }
    }

    /// Apply a merged override layer to the defaults of `kind`
    pub fn resolve(kind: EngineKind, overrides: ScenarioOverrides) -> Result<Self, ConfigError> {
        let base = Self::defaults(kind);

        let log_level = match overrides.log_level.as_deref() {
            Some(level) => LogLevel::from_str(level)?,
            None => base.log_level,
        };
        let payoff = match overrides.payoff.as_deref() {
            Some(name) => PayoffFunction::from_str(name).map_err(|e| ConfigError::InvalidPayoff(e.to_string()))?,
            None => base.payoff,
        };

        Ok(Self {
            kind,
            log_level,
            spot: overrides.spot.unwrap_or(base.spot),
            strike: overrides.strike.unwrap_or(base.strike),
            rate: overrides.rate.unwrap_or(base.rate),
            volatility: overrides.volatility.unwrap_or(base.volatility),
            dividend: overrides.dividend.unwrap_or(base.dividend),
            expiry: overrides.expiry.unwrap_or(base.expiry),
            payoff,
            steps: overrides.steps.unwrap_or(base.steps),
            replications: overrides.replications.unwrap_or(base.replications),
            seed: overrides.seed.or(base.seed),
            parallel: overrides.parallel.unwrap_or(base.parallel),
            corrected: overrides.corrected.unwrap_or(base.corrected),
            alpha: overrides.alpha.unwrap_or(base.alpha),
            vbar: overrides.vbar.unwrap_or(base.vbar),
            xi: overrides.xi.unwrap_or(base.xi),
        })
    }

    /// Validated market data
    pub fn market_data(&self) -> Result<MarketData, PricingError> {
        Ok(MarketData::new(self.rate, self.spot, self.volatility, self.dividend)?)
    }

    /// Validated payoff; path-dependent functions become exotic payoffs
    pub fn payoff(&self) -> Result<Payoff, PricingError> {
        let payoff = if self.payoff.is_path_dependent() {
            Payoff::exotic(self.expiry, self.strike, self.payoff)?
        } else {
            Payoff::vanilla(self.expiry, self.strike, self.payoff)?
        };
        Ok(payoff)
    }

    /// Validated engine for the scenario's command
    pub fn engine(&self) -> Result<PricingEngine, PricingError> {
        let engine = match self.kind {
            EngineKind::Binomial => PricingEngine::Binomial(BinomialEngine::new(self.steps)?),
            EngineKind::NaiveMonteCarlo => PricingEngine::NaiveMonteCarlo(NaiveMonteCarloEngine::new(self.mc_config()?)),
            EngineKind::ControlVariate => {
                let variance = StochasticVarianceParams::new(self.alpha, self.vbar, self.xi)?;
                let pricer = if self.corrected {
                    ControlVariatePricer::Corrected
                } else {
                    ControlVariatePricer::Uncorrected
                };
                PricingEngine::ControlVariateMonteCarlo(
                    ControlVariateEngine::new(self.mc_config()?, variance).with_pricer(pricer),
                )
            }
        };
        Ok(engine)
    }

    fn mc_config(&self) -> Result<MonteCarloConfig, PricingError> {
        let mut builder = MonteCarloConfig::builder()
            .replications(self.replications)
            .steps(self.steps)
            .parallel(self.parallel);
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        Ok(builder.build()?)
    }
}
