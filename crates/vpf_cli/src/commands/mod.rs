//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod estimate;
pub mod generate;
pub mod poisson;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use tracing::info;
use vpf_kernel::mc::{Execution, VoidProbabilityEstimator, VpfConfig};

use crate::config::CliConfig;
use crate::output::{OutputFormat, Report};
use crate::Result;

/// Estimator options that can be given on the command line.
#[derive(Debug, Clone, Default)]
pub struct EstimatorOverrides {
    /// Trial spheres per radius.
    pub trials: Option<usize>,
    /// Generator seed.
    pub seed: Option<u64>,
    /// Force parallel execution.
    pub parallel: bool,
}

/// Builds an estimator from the file configuration and CLI overrides.
pub(crate) fn build_estimator(
    config: &CliConfig,
    overrides: &EstimatorOverrides,
) -> Result<VoidProbabilityEstimator> {
    let execution = if overrides.parallel || config.estimator.parallel {
        Execution::Parallel
    } else {
        Execution::Sequential
    };

    let vpf_config = VpfConfig::builder()
        .n_trials(overrides.trials.unwrap_or(config.estimator.trials))
        .maybe_seed(overrides.seed.or(config.estimator.seed))
        .execution(execution)
        .build()?;

    let estimator = VoidProbabilityEstimator::new(vpf_config)?;
    info!(
        trials = estimator.config().n_trials(),
        seed = estimator.seed(),
        execution = ?estimator.config().execution(),
        "estimator ready"
    );
    Ok(estimator)
}

/// Writes a report to `output`, or stdout when absent.
pub(crate) fn emit(report: &Report, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            report.write(format, BufWriter::new(File::create(path)?))?;
            info!(path = %path.display(), %format, "results written");
        }
        None => report.write(format, io::stdout().lock())?,
    }
    Ok(())
}
