//! Monte Carlo estimator configuration.
//!
//! The number of trial spheres per radius is a tunable trade-off between
//! accuracy and runtime; the standard error of each estimate scales as
//! `1 / sqrt(n_trials)`.

use super::error::ConfigError;

/// Default number of trial spheres per radius.
pub const DEFAULT_TRIALS: usize = 100;

/// Maximum number of trial spheres per radius.
pub const MAX_TRIALS: usize = 100_000_000;

/// How radii are distributed over threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Execution {
    /// One generator stream, radii in order.
    #[default]
    Sequential,
    /// One child stream per radius, radii processed with Rayon.
    Parallel,
}

/// Void probability estimator configuration.
///
/// Use [`VpfConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use vpf_kernel::mc::{Execution, VpfConfig};
///
/// let config = VpfConfig::builder()
///     .n_trials(10_000)
///     .execution(Execution::Parallel)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_trials(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VpfConfig {
    /// Number of trial spheres per radius.
    n_trials: usize,
    /// Optional seed; `None` seeds from entropy.
    seed: Option<u64>,
    /// Sequential or parallel execution.
    execution: Execution,
}

impl Default for VpfConfig {
    fn default() -> Self {
        Self {
            n_trials: DEFAULT_TRIALS,
            seed: None,
            execution: Execution::Sequential,
        }
    }
}

impl VpfConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> VpfConfigBuilder {
        VpfConfigBuilder::default()
    }

    /// Returns the number of trial spheres per radius.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the execution mode.
    #[inline]
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTrialCount` if `n_trials` is 0 or
    /// greater than [`MAX_TRIALS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_trials == 0 || self.n_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.n_trials));
        }
        Ok(())
    }
}

/// Builder for [`VpfConfig`].
///
/// Unset fields take their defaults: [`DEFAULT_TRIALS`] trials, entropy
/// seeding and sequential execution.
#[derive(Clone, Debug, Default)]
pub struct VpfConfigBuilder {
    n_trials: Option<usize>,
    seed: Option<u64>,
    execution: Execution,
}

impl VpfConfigBuilder {
    /// Sets the number of trial spheres per radius, in [1, 100_000_000].
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = Some(n_trials);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the seed from an option, leaving entropy seeding on `None`.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the execution mode.
    #[inline]
    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the trial count is invalid.
    pub fn build(self) -> Result<VpfConfig, ConfigError> {
        let config = VpfConfig {
            n_trials: self.n_trials.unwrap_or(DEFAULT_TRIALS),
            seed: self.seed,
            execution: self.execution,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = VpfConfig::builder().build().unwrap();

        assert_eq!(config.n_trials(), DEFAULT_TRIALS);
        assert_eq!(config.seed(), None);
        assert_eq!(config.execution(), Execution::Sequential);
        assert_eq!(config, VpfConfig::default());
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = VpfConfig::builder().n_trials(1000).seed(42).build().unwrap();

        assert_eq!(config.n_trials(), 1000);
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_config_builder_maybe_seed() {
        let config = VpfConfig::builder().maybe_seed(None).build().unwrap();
        assert_eq!(config.seed(), None);

        let config = VpfConfig::builder().maybe_seed(Some(7)).build().unwrap();
        assert_eq!(config.seed(), Some(7));
    }

    #[test]
    fn test_config_builder_parallel() {
        let config = VpfConfig::builder()
            .execution(Execution::Parallel)
            .build()
            .unwrap();

        assert_eq!(config.execution(), Execution::Parallel);
    }

    #[test]
    fn test_config_invalid_zero_trials() {
        let result = VpfConfig::builder().n_trials(0).build();

        assert!(matches!(result, Err(ConfigError::InvalidTrialCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_trials() {
        let result = VpfConfig::builder().n_trials(MAX_TRIALS + 1).build();

        assert!(matches!(result, Err(ConfigError::InvalidTrialCount(_))));
    }

    #[test]
    fn test_execution_default() {
        assert_eq!(Execution::default(), Execution::Sequential);
    }
}
