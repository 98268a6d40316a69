//! # vpf_kernel: Void Probability Function Estimation
//!
//! Monte Carlo estimator of the void probability function (VPF) for a
//! catalogue of point-like objects in the unit cube with periodic boundary
//! conditions. The VPF at radius `r` is the probability that a randomly
//! placed sphere of radius `r` contains no catalogued point.
//!
//! ## Architecture
//!
//! ```text
//! VoidProbabilityEstimator
//! ├── VpfConfig        (trial count, seed, execution mode)
//! ├── VpfRng           (seeded PRNG, UniformSource capability)
//! └── per radius
//!     ├── TrialSphere  (random centre + precomputed ShiftVector)
//!     └── torus        (boundary-aware distance transform)
//! ```
//!
//! ## Modules
//!
//! - [`torus`]: Toroidal distance transform for the 3-torus
//! - [`rng`]: Uniform random source capability and seeded PRNG
//! - [`mc`]: Trial spheres, configuration and the Monte Carlo estimator
//! - [`input`]: Caller-side validation of catalogues and radius lists
//! - [`analytical`]: Closed-form VPF of a Poisson point process
//!
//! ## Example
//!
//! ```rust
//! use vpf_kernel::mc::{VoidProbabilityEstimator, VpfConfig};
//!
//! let config = VpfConfig::builder().n_trials(1000).seed(42).build().unwrap();
//! let mut estimator = VoidProbabilityEstimator::new(config).unwrap();
//!
//! let galaxies = vec![[0.25, 0.25, 0.25], [0.75, 0.75, 0.75]];
//! let probabilities = estimator.estimate(&[0.05, 0.1], &galaxies);
//!
//! assert_eq!(probabilities.len(), 2);
//! assert!(probabilities.iter().all(|p| (0.0..=1.0).contains(p)));
//! ```
//!
//! ## Preconditions
//!
//! Coordinates must lie in [0, 1) and radii should be below 0.5. The
//! kernel does not check either on the hot path; use [`input`] before
//! calling the estimator.

pub mod analytical;
pub mod input;
pub mod mc;
pub mod rng;
pub mod torus;

pub use input::InputError;
pub use torus::Point3;
