//! Estimate command implementation
//!
//! Estimates the void probability function of a catalogue file.

use std::path::Path;
use tracing::info;

use super::{build_estimator, emit, EstimatorOverrides};
use crate::catalogue::read_catalogue;
use crate::config::CliConfig;
use crate::output::{OutputFormat, Report};
use crate::radii;
use crate::Result;

/// Radii used when neither `--radii` nor `--range` is given.
pub const DEFAULT_RANGE: &str = "0.01:0.35:0.01";

/// Run the estimate command
pub fn run(
    config: &CliConfig,
    catalogue: &Path,
    radii_list: Option<&str>,
    range: Option<&str>,
    overrides: &EstimatorOverrides,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    info!("Starting void probability estimation...");
    info!("  Catalogue: {}", catalogue.display());

    let radii = radii::resolve(radii_list, range, DEFAULT_RANGE)?;
    let galaxies = read_catalogue(catalogue)?;
    info!("  Galaxies: {}", galaxies.len());
    info!("  Radii: {}", radii.len());

    let mut estimator = build_estimator(config, overrides)?;
    let estimates = estimator.estimate_detailed(&radii, &galaxies);

    let report = Report {
        seed: estimator.seed(),
        n_galaxies: galaxies.len(),
        estimates,
        poisson: None,
    };
    emit(&report, format, output)?;

    info!("Estimation complete");
    Ok(())
}
