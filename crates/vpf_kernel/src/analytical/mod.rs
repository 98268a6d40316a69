//! Closed-form void probability of a Poisson point process.
//!
//! For points scattered independently and uniformly with mean density `n`
//! per unit volume, the number inside a sphere of volume `V` is Poisson
//! with mean `n V`, so
//!
//! ```text
//! P0(r) = exp(-n * (4/3) * pi * r^3)
//! ```
//!
//! A uniformly random catalogue of `N` points in the unit cube approximates
//! this with `n = N`, which makes the formula a convergence check for the
//! Monte Carlo estimator.

use std::f64::consts::PI;

/// Volume of a sphere of radius `radius`.
#[inline]
pub fn sphere_volume(radius: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3)
}

/// Void probability of a Poisson process with `density` points per unit volume.
///
/// # Examples
///
/// ```rust
/// use vpf_kernel::analytical::poisson_void_probability;
///
/// assert_eq!(poisson_void_probability(0.0, 0.3), 1.0);
/// assert!(poisson_void_probability(250.0, 0.1) < 0.4);
/// ```
#[inline]
pub fn poisson_void_probability(density: f64, radius: f64) -> f64 {
    (-density * sphere_volume(radius)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_volume() {
        assert_relative_eq!(sphere_volume(1.0), 4.0 / 3.0 * PI, epsilon = 1e-12);
        assert_eq!(sphere_volume(0.0), 0.0);
    }

    #[test]
    fn test_poisson_void_probability() {
        // n V = 1 gives 1/e.
        let radius = (3.0 / (4.0 * PI * 1000.0)).cbrt();
        assert_relative_eq!(
            poisson_void_probability(1000.0, radius),
            (-1.0f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_poisson_monotone_in_radius() {
        let p: Vec<f64> = [0.01, 0.05, 0.1, 0.2]
            .iter()
            .map(|&r| poisson_void_probability(250.0, r))
            .collect();
        assert!(p.windows(2).all(|w| w[1] < w[0]));
    }
}
