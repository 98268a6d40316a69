//! Monte Carlo void probability estimation.
//!
//! # Architecture
//!
//! ```text
//! VoidProbabilityEstimator
//! ├── VpfConfig          (trial count, seed, execution mode)
//! ├── VpfRng             (seeded once per estimator)
//! └── per radius
//!     ├── TrialSphere::sample()  (three uniform draws)
//!     ├── TrialSphere::is_empty() (short-circuit catalogue scan)
//!     └── VoidEstimate           (empty fraction, binomial error)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use vpf_kernel::mc::{Execution, VoidProbabilityEstimator, VpfConfig};
//!
//! let config = VpfConfig::builder()
//!     .n_trials(2_000)
//!     .execution(Execution::Parallel)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut estimator = VoidProbabilityEstimator::new(config).unwrap();
//! let galaxies = [[0.1, 0.2, 0.3], [0.9, 0.8, 0.7]];
//!
//! for estimate in estimator.estimate_detailed(&[0.05, 0.1], &galaxies) {
//!     println!("r={} P0={} +/- {}", estimate.radius, estimate.probability, estimate.std_error());
//! }
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod parallel;
pub mod result;
pub mod sphere;

pub use config::{Execution, VpfConfig, VpfConfigBuilder, DEFAULT_TRIALS, MAX_TRIALS};
pub use error::ConfigError;
pub use estimator::{count_empty_spheres, estimate_with, VoidProbabilityEstimator};
pub use parallel::estimate_parallel;
pub use result::VoidEstimate;
pub use sphere::TrialSphere;
