//! Python extension module `_vpf`.
//!
//! Exposes the estimator to Python with the column-based call used by
//! analysis scripts:
//!
//! ```python
//! import numpy as np
//! import _vpf
//!
//! radii = np.arange(0.0001, 0.35, 0.0001)
//! x, y, z = np.random.random((3, 250))
//! p0 = _vpf.vpf(radii, x, y, z)
//! ```
//!
//! Inputs are validated before the estimator runs, and invalid input
//! raises `ValueError`. The GIL is released during estimation.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use thiserror::Error;
use vpf_kernel::input::{catalogue_from_columns, validate_radii};
use vpf_kernel::mc::{ConfigError, Execution, VoidProbabilityEstimator, VpfConfig, DEFAULT_TRIALS};
use vpf_kernel::InputError;

/// Errors raised to Python as `ValueError`.
#[derive(Debug, Error)]
pub enum BindingError {
    /// Catalogue or radius list rejected.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Estimator settings rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<BindingError> for PyErr {
    fn from(err: BindingError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Validates the inputs and estimates one void probability per radius.
///
/// # Errors
///
/// Returns `BindingError::Input` for ragged columns, coordinates outside
/// [0, 1) or non-positive radii, and `BindingError::Config` for an
/// invalid trial count.
pub fn estimate_columns(
    radii: &[f64],
    x: &[f64],
    y: &[f64],
    z: &[f64],
    trials: usize,
    seed: Option<u64>,
    parallel: bool,
) -> Result<Vec<f64>, BindingError> {
    let galaxies = catalogue_from_columns(x, y, z)?;
    validate_radii(radii)?;

    let execution = if parallel {
        Execution::Parallel
    } else {
        Execution::Sequential
    };
    let config = VpfConfig::builder()
        .n_trials(trials)
        .maybe_seed(seed)
        .execution(execution)
        .build()?;

    let mut estimator = VoidProbabilityEstimator::new(config)?;
    Ok(estimator.estimate(radii, &galaxies))
}

/// Void probability for each radius in `rad`, given galaxy coordinates
/// `x`, `y`, `z` in the periodic unit cube.
#[pyfunction]
#[pyo3(signature = (rad, x, y, z, trials = DEFAULT_TRIALS, seed = None, parallel = false))]
#[allow(clippy::too_many_arguments)]
fn vpf(
    py: Python<'_>,
    rad: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    trials: usize,
    seed: Option<u64>,
    parallel: bool,
) -> PyResult<Vec<f64>> {
    let probabilities =
        py.allow_threads(|| estimate_columns(&rad, &x, &y, &z, trials, seed, parallel))?;
    Ok(probabilities)
}

#[pymodule]
fn _vpf(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(vpf, m)?)?;
    m.add("DEFAULT_TRIALS", DEFAULT_TRIALS)?;
    Ok(())
}
