//! Monte Carlo void probability estimator.
//!
//! For each radius a fixed number of trial spheres is placed uniformly in
//! the periodic box. A sphere counts as empty unless some galaxy lies
//! strictly inside it, and the void probability is the empty fraction.
//!
//! # Generator Use
//!
//! The estimator owns one [`VpfRng`], seeded once at construction. In
//! sequential mode every trial of every radius draws from that single
//! stream, three values per trial, radii in input order. In parallel mode
//! radius `i` draws from the child stream `rng.stream(i)` instead; see
//! [`estimate_parallel`](super::parallel::estimate_parallel). Child streams
//! depend only on the seed, so repeated parallel calls on one estimator
//! return identical estimates, whereas sequential calls continue the stream.

use tracing::{debug, info_span};

use super::config::{Execution, VpfConfig};
use super::error::ConfigError;
use super::parallel::estimate_parallel;
use super::result::VoidEstimate;
use super::sphere::TrialSphere;
use crate::rng::{UniformSource, VpfRng};
use crate::torus::Point3;

/// Counts how many of `n_trials` random spheres of `radius` are empty.
///
/// Draws exactly `3 * n_trials` values from `source`. `n_trials` must be
/// at least 1; [`VpfConfig::validate`] enforces this for the estimator.
pub fn count_empty_spheres<S: UniformSource + ?Sized>(
    source: &mut S,
    radius: f64,
    galaxies: &[Point3],
    n_trials: usize,
) -> usize {
    debug_assert!(n_trials > 0, "n_trials must be at least 1");
    let mut empty_count = 0;
    for _ in 0..n_trials {
        let sphere = TrialSphere::sample(source, radius);
        if sphere.is_empty(galaxies) {
            empty_count += 1;
        }
    }
    empty_count
}

/// Estimates the void probability for each radius from one source.
///
/// Radii are processed in order and are independent of one another apart
/// from sharing `source`. The output is index-aligned with `radii`.
/// `n_trials` must be at least 1.
///
/// # Examples
///
/// ```rust
/// use vpf_kernel::mc::estimate_with;
/// use vpf_kernel::rng::ReplaySource;
///
/// let galaxies = [[0.5, 0.5, 0.5]];
///
/// // Every sphere lands far from the only galaxy.
/// let mut far = ReplaySource::fixed_centre([0.01, 0.01, 0.01]);
/// assert_eq!(estimate_with(&mut far, &[0.1], &galaxies, 100)[0].probability, 1.0);
///
/// // Every sphere lands on it.
/// let mut on = ReplaySource::fixed_centre([0.5, 0.5, 0.5]);
/// assert_eq!(estimate_with(&mut on, &[0.1], &galaxies, 100)[0].probability, 0.0);
/// ```
pub fn estimate_with<S: UniformSource + ?Sized>(
    source: &mut S,
    radii: &[f64],
    galaxies: &[Point3],
    n_trials: usize,
) -> Vec<VoidEstimate> {
    debug_assert!(n_trials > 0, "n_trials must be at least 1");
    radii
        .iter()
        .map(|&radius| {
            let empty_count = count_empty_spheres(source, radius, galaxies, n_trials);
            let estimate = VoidEstimate::from_counts(radius, empty_count, n_trials);
            debug!(
                radius,
                empty_count,
                probability = estimate.probability,
                "estimated void probability"
            );
            estimate
        })
        .collect()
}

/// Monte Carlo void probability estimator.
///
/// # Examples
///
/// ```rust
/// use vpf_kernel::mc::{VoidProbabilityEstimator, VpfConfig};
///
/// let config = VpfConfig::builder().n_trials(500).seed(42).build().unwrap();
/// let mut estimator = VoidProbabilityEstimator::new(config).unwrap();
///
/// // No galaxies: every sphere is empty.
/// assert_eq!(estimator.estimate(&[0.1, 0.2], &[]), vec![1.0, 1.0]);
/// ```
#[derive(Clone, Debug)]
pub struct VoidProbabilityEstimator {
    config: VpfConfig,
    rng: VpfRng,
}

impl VoidProbabilityEstimator {
    /// Creates an estimator, seeding its generator once.
    ///
    /// Uses the configured seed if present, otherwise entropy.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: VpfConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed() {
            Some(seed) => VpfRng::from_seed(seed),
            None => VpfRng::from_entropy(),
        };

        Ok(Self { config, rng })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &VpfConfig {
        &self.config
    }

    /// Returns the seed the generator was initialised with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Rewinds the generator to its initial seed.
    pub fn reset(&mut self) {
        self.rng = VpfRng::from_seed(self.rng.seed());
    }

    /// Estimates the void probability for each radius.
    ///
    /// Returns one probability in [0, 1] per radius, index-aligned with
    /// `radii`. An empty catalogue yields 1.0 everywhere; empty `radii`
    /// yield an empty vector.
    pub fn estimate(&mut self, radii: &[f64], galaxies: &[Point3]) -> Vec<f64> {
        self.estimate_detailed(radii, galaxies)
            .into_iter()
            .map(|estimate| estimate.probability)
            .collect()
    }

    /// Estimates the void probability with counts and errors per radius.
    pub fn estimate_detailed(&mut self, radii: &[f64], galaxies: &[Point3]) -> Vec<VoidEstimate> {
        let n_trials = self.config.n_trials();
        let span = info_span!(
            "vpf",
            n_radii = radii.len(),
            n_galaxies = galaxies.len(),
            n_trials,
            seed = self.rng.seed()
        );
        let _guard = span.enter();

        match self.config.execution() {
            Execution::Sequential => estimate_with(&mut self.rng, radii, galaxies, n_trials),
            Execution::Parallel => estimate_parallel(&self.rng, radii, galaxies, n_trials),
        }
    }
}
