//! Rayon-based parallel estimation across radii.
//!
//! Radii are independent, so each one gets its own work item and its own
//! generator stream. Radius `i` always draws from `base.stream(i)`, which
//! makes the output a pure function of the base seed: the thread count and
//! scheduling order have no effect on the result.

use rayon::prelude::*;

use super::estimator::count_empty_spheres;
use super::result::VoidEstimate;
use crate::rng::VpfRng;
use crate::torus::Point3;

/// Estimates the void probability for each radius in parallel.
///
/// The output is index-aligned with `radii`. `n_trials` must be at least 1.
///
/// # Examples
///
/// ```rust
/// use vpf_kernel::mc::estimate_parallel;
/// use vpf_kernel::rng::VpfRng;
///
/// let base = VpfRng::from_seed(42);
/// let galaxies = [[0.5, 0.5, 0.5]];
///
/// let a = estimate_parallel(&base, &[0.05, 0.1, 0.2], &galaxies, 1000);
/// let b = estimate_parallel(&base, &[0.05, 0.1, 0.2], &galaxies, 1000);
/// assert_eq!(a, b);
/// ```
pub fn estimate_parallel(
    base: &VpfRng,
    radii: &[f64],
    galaxies: &[Point3],
    n_trials: usize,
) -> Vec<VoidEstimate> {
    radii
        .par_iter()
        .enumerate()
        .map(|(index, &radius)| {
            let mut rng = base.stream(index as u64);
            let empty_count = count_empty_spheres(&mut rng, radius, galaxies, n_trials);
            VoidEstimate::from_counts(radius, empty_count, n_trials)
        })
        .collect()
}
