//! Stochastic-variance Monte Carlo engine with Black-Scholes control variates.
//!
//! Each replication walks a price path and a variance path over
//! `steps` grid points (`dt = T/steps`, `S[0] = spot`, `V[0] = Vbar`). For
//! `i = 1..steps−1` it draws `z1` (variance) then `z2` (price), advances both
//! processes and accumulates three martingale control variates built from the
//! Black-Scholes delta, gamma and vega of the priced option, evaluated at
//! `S[i]` and calendar time `(i−1)·dt` with the market volatility:
//!
//! ```text
//! cv1 += Δ·(S[i] − S[i−1]·e^{(r−q)dt})
//! cv2 += Γ·((S[i] − S[i−1])² − S[i−1]²·(e^{2(r−q)dt}·e^{V[i−1]dt} + 1 − 2e^{(r−q)dt}))
//! cv3 += ν·((V[i] − V[i−1]) − (E[V[i] | V[i−1]] − V[i−1]))
//! ```
//!
//! [`ControlVariatePricer::Uncorrected`] averages the raw payoffs and leaves
//! the control variates unused. [`ControlVariatePricer::Corrected`] averages
//! `payoff − cv1 − cv2/2 − cv3`.

use pricer_core::market_data::MarketData;
use pricer_core::types::PricingError;
use pricer_models::analytical::{delta, gamma, put_delta, vega};
use pricer_models::instruments::Payoff;
use pricer_models::models::heston::spot_step;
use pricer_models::models::StochasticVarianceParams;

use crate::mc::{run_replications, ConfigError, MonteCarloConfig, PathWorkspace};
use crate::result::PricingResult;
use crate::rng::PricerRng;

/// Replication estimator of the control-variate engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlVariatePricer {
    /// Raw payoff; control variates are accumulated but not applied.
    #[default]
    Uncorrected,
    /// Payoff minus the control variates with fixed coefficients 1, 1/2, 1.
    Corrected,
}

/// Accumulated control variates of one replication.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlVariates {
    /// Delta hedge error.
    pub delta: f64,
    /// Gamma hedge error.
    pub gamma: f64,
    /// Vega hedge error.
    pub vega: f64,
}

impl ControlVariates {
    /// Amount subtracted from the payoff by the corrected estimator.
    #[inline]
    pub fn correction(&self) -> f64 {
        self.delta + 0.5 * self.gamma + self.vega
    }
}

/// One simulated replication, for inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedPath {
    /// Price path, `steps` points starting at the spot.
    pub spot: Vec<f64>,
    /// Variance path, `steps` points starting at `Vbar`; never negative.
    pub variance: Vec<f64>,
    /// Undiscounted payoff of the price path.
    pub payoff: f64,
    /// Control variates accumulated along the path.
    pub controls: ControlVariates,
}

impl SimulatedPath {
    /// Undiscounted replication value under `pricer`.
    #[inline]
    pub fn value(&self, pricer: ControlVariatePricer) -> f64 {
        replication_value(pricer, self.payoff, &self.controls)
    }
}

#[inline]
fn replication_value(pricer: ControlVariatePricer, payoff: f64, controls: &ControlVariates) -> f64 {
    match pricer {
        ControlVariatePricer::Uncorrected => payoff,
        ControlVariatePricer::Corrected => payoff - controls.correction(),
    }
}

/// Per-call constants of the discretisation.
#[derive(Clone, Copy, Debug)]
struct Grid {
    dt: f64,
    erddt: f64,
    egam1: f64,
    egam2: f64,
}

impl Grid {
    fn new(data: &MarketData, expiry: f64, steps: usize) -> Self {
        let dt = expiry / steps as f64;
        let erddt = (data.carry() * dt).exp();
        Self {
            dt,
            erddt,
            egam1: (2.0 * data.carry() * dt).exp(),
            egam2: 1.0 - 2.0 * erddt,
        }
    }
}

/// Control-variate engine parameters.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::StochasticVarianceParams;
/// use pricer_pricing::engine::{ControlVariateEngine, ControlVariatePricer};
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder().replications(5).steps(2).build().unwrap();
/// let variance = StochasticVarianceParams::new(5.0, 0.02, 0.052).unwrap();
/// let engine = ControlVariateEngine::new(config, variance).with_pricer(ControlVariatePricer::Corrected);
/// assert_eq!(engine.pricer(), ControlVariatePricer::Corrected);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ControlVariateEngine {
    config: MonteCarloConfig,
    variance: StochasticVarianceParams,
    pricer: ControlVariatePricer,
}

impl ControlVariateEngine {
    /// Creates the engine with the uncorrected estimator.
    pub fn new(config: MonteCarloConfig, variance: StochasticVarianceParams) -> Self {
        Self {
            config,
            variance,
            pricer: ControlVariatePricer::default(),
        }
    }

    /// Selects the estimator.
    #[inline]
    pub fn with_pricer(mut self, pricer: ControlVariatePricer) -> Self {
        self.pricer = pricer;
        self
    }

    /// Simulation configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Variance process parameters.
    #[inline]
    pub fn variance(&self) -> &StochasticVarianceParams {
        &self.variance
    }

    /// Estimator.
    #[inline]
    pub fn pricer(&self) -> ControlVariatePricer {
        self.pricer
    }

    /// Sets the replication count, leaving the engine unchanged on error.
    pub fn set_replications(&mut self, replications: usize) -> Result<(), ConfigError> {
        self.config.set_replications(replications)
    }

    /// Sets the number of grid points, leaving the engine unchanged on error.
    pub fn set_steps(&mut self, steps: usize) -> Result<(), ConfigError> {
        self.config.set_steps(steps)
    }

    /// Replaces the variance process parameters.
    #[inline]
    pub fn set_variance(&mut self, variance: StochasticVarianceParams) {
        self.variance = variance;
    }

    /// Prices `payoff` drawing variates from `rng`.
    pub fn price(
        &self,
        payoff: &Payoff,
        data: &MarketData,
        rng: &mut PricerRng,
    ) -> Result<PricingResult, PricingError> {
        let steps = self.config.steps();
        let grid = Grid::new(data, payoff.expiry(), steps);
        let pricer = self.pricer;

        let stats = run_replications(&self.config, steps, rng, |rng, workspace| {
            let controls = self.simulate_into(payoff, data, &grid, rng, workspace);
            let value = payoff.evaluate_path(workspace.spot());
            replication_value(pricer, value, &controls)
        });

        Ok(PricingResult::from_statistics(&stats, data.discount_factor(payoff.expiry())))
    }

    /// Simulates one replication, consuming the same draws as one replication
    /// of [`price`](Self::price).
    pub fn simulate_path(&self, payoff: &Payoff, data: &MarketData, rng: &mut PricerRng) -> SimulatedPath {
        let steps = self.config.steps();
        let grid = Grid::new(data, payoff.expiry(), steps);
        let mut workspace = PathWorkspace::new(steps);
        let controls = self.simulate_into(payoff, data, &grid, rng, &mut workspace);

        SimulatedPath {
            payoff: payoff.evaluate_path(workspace.spot()),
            spot: workspace.spot().to_vec(),
            variance: workspace.variance().to_vec(),
            controls,
        }
    }

    fn simulate_into(
        &self,
        payoff: &Payoff,
        data: &MarketData,
        grid: &Grid,
        rng: &mut PricerRng,
        workspace: &mut PathWorkspace,
    ) -> ControlVariates {
        let (spot, variance) = workspace.split_mut();
        let strike = payoff.strike();
        let expiry = payoff.expiry();
        let is_call = payoff.function().is_call();
        let (sigma, rate, dividend) = (data.volatility(), data.rate(), data.dividend());
        let dt = grid.dt;

        spot[0] = data.spot();
        variance[0] = self.variance.vbar();
        let mut controls = ControlVariates::default();

        for i in 1..spot.len() {
            let z1 = rng.gen_normal();
            let z2 = rng.gen_normal();
            let (s_prev, v_prev) = (spot[i - 1], variance[i - 1]);

            variance[i] = self.variance.variance_step(v_prev, dt, z1);
            spot[i] = spot_step(s_prev, v_prev, rate, dt, z2);

            let t = (i - 1) as f64 * dt;
            let s = spot[i];
            let hedge_delta = if is_call {
                delta(s, t, strike, expiry, sigma, rate, dividend)
            } else {
                put_delta(s, t, strike, expiry, sigma, rate, dividend)
            };
            let hedge_gamma = gamma(s, t, strike, expiry, sigma, rate, dividend);
            let hedge_vega = vega(s, t, strike, expiry, sigma, rate, dividend);

            controls.delta += hedge_delta * (s - s_prev * grid.erddt);
            controls.gamma += hedge_gamma
                * ((s - s_prev).powi(2) - s_prev * s_prev * (grid.egam1 * (v_prev * dt).exp() + grid.egam2));
            let expected_move = self.variance.expected_variance(v_prev, dt) - v_prev;
            controls.vega += hedge_vega * ((variance[i] - v_prev) - expected_move);
        }

        controls
    }
}
