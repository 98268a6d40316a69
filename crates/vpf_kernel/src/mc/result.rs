//! Per-radius estimation results.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Void probability estimate for one radius.
///
/// # Examples
///
/// ```rust
/// use vpf_kernel::mc::VoidEstimate;
///
/// let estimate = VoidEstimate::from_counts(0.1, 25, 100);
/// assert_eq!(estimate.probability, 0.25);
/// println!("P0 = {} +/- {}", estimate.probability, estimate.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VoidEstimate {
    /// Sphere radius, as a fraction of the box side.
    pub radius: f64,
    /// Fraction of trial spheres that were empty.
    pub probability: f64,
    /// Number of empty trial spheres.
    pub empty_count: usize,
    /// Number of trial spheres placed.
    pub n_trials: usize,
}

impl VoidEstimate {
    /// Builds an estimate from raw counts.
    ///
    /// `probability` is `empty_count / n_trials`; zero trials give zero.
    #[inline]
    pub fn from_counts(radius: f64, empty_count: usize, n_trials: usize) -> Self {
        let probability = if n_trials == 0 {
            0.0
        } else {
            empty_count as f64 / n_trials as f64
        };
        Self {
            radius,
            probability,
            empty_count,
            n_trials,
        }
    }

    /// Binomial standard error `sqrt(p (1 - p) / n_trials)`.
    #[inline]
    pub fn std_error(&self) -> f64 {
        if self.n_trials == 0 {
            return 0.0;
        }
        let p = self.probability;
        (p * (1.0 - p) / self.n_trials as f64).sqrt()
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error()
    }
}
