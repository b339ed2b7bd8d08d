//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and builder shared by the
//! naive and control-variate Monte Carlo engines.

use super::error::ConfigError;

/// Maximum number of replications allowed.
pub const MAX_REPLICATIONS: usize = 10_000_000;

/// Maximum number of time steps allowed per path (also bounds lattice depth).
pub const MAX_STEPS: usize = 10_000;

/// Monte Carlo simulation configuration.
///
/// Use [`MonteCarloConfigBuilder`] to construct instances. Individual fields
/// can be changed afterwards through the validating `set_*` methods.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .replications(100_000)
///     .steps(1)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.replications(), 100_000);
/// assert_eq!(config.steps(), 1);
/// assert!(!config.parallel());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of independent replications.
    replications: usize,
    /// Number of time steps per path.
    steps: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Fan replications out over the rayon pool.
    parallel: bool,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of replications.
    #[inline]
    pub fn replications(&self) -> usize {
        self.replications
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether replications run in parallel.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the replication count, leaving the configuration unchanged on error.
    pub fn set_replications(&mut self, replications: usize) -> Result<(), ConfigError> {
        validate_replications(replications)?;
        self.replications = replications;
        Ok(())
    }

    /// Sets the step count, leaving the configuration unchanged on error.
    pub fn set_steps(&mut self, steps: usize) -> Result<(), ConfigError> {
        validate_steps(steps)?;
        self.steps = steps;
        Ok(())
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Enables or disables parallel replication.
    #[inline]
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `replications` is 0 or greater than 10,000,000
    /// - `steps` is 0 or greater than 10,000
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_replications(self.replications)?;
        validate_steps(self.steps)
    }
}

#[inline]
fn validate_replications(replications: usize) -> Result<(), ConfigError> {
    if replications == 0 || replications > MAX_REPLICATIONS {
        return Err(ConfigError::InvalidReplicationCount(replications));
    }
    Ok(())
}

#[inline]
pub(crate) fn validate_steps(steps: usize) -> Result<(), ConfigError> {
    if steps == 0 || steps > MAX_STEPS {
        return Err(ConfigError::InvalidStepCount(steps));
    }
    Ok(())
}

/// Builder for [`MonteCarloConfig`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .replications(50_000)
///     .steps(252)
///     .seed(12345)
///     .parallel(true)
///     .build()
///     .expect("valid config");
/// assert!(config.parallel());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    replications: Option<usize>,
    steps: Option<usize>,
    seed: Option<u64>,
    parallel: bool,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of replications, in [1, 10_000_000].
    #[inline]
    pub fn replications(mut self, replications: usize) -> Self {
        self.replications = Some(replications);
        self
    }

    /// Sets the number of time steps per path, in [1, 10_000].
    #[inline]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs replications on the rayon pool when `true`.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `replications` not set or invalid
    /// - `steps` not set or invalid
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let replications = self.replications.ok_or(ConfigError::InvalidParameter {
            name: "replications",
            value: "must be specified".to_string(),
        })?;

        let steps = self.steps.ok_or(ConfigError::InvalidParameter {
            name: "steps",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            replications,
            steps,
            seed: self.seed,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}
