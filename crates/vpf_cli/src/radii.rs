//! Radius list arguments.
//!
//! Radii are given either as a comma-separated list (`0.05,0.1,0.2`) or
//! as a half-open range `start:stop:step`.

use vpf_kernel::input::{radius_range, validate_radii};

use crate::{CliError, Result};

fn parse_value(text: &str) -> Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| CliError::InvalidArgument(format!("'{}' is not a number", text.trim())))
}

/// Parses a comma-separated radius list.
pub fn parse_list(text: &str) -> Result<Vec<f64>> {
    let radii = text
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_value)
        .collect::<Result<Vec<f64>>>()?;

    validate_radii(&radii)?;
    Ok(radii)
}

/// Parses a `start:stop:step` range.
pub fn parse_range(text: &str) -> Result<Vec<f64>> {
    let parts: Vec<&str> = text.split(':').collect();
    let [start, stop, step] = parts.as_slice() else {
        return Err(CliError::InvalidArgument(format!(
            "range '{}' must have the form start:stop:step",
            text
        )));
    };

    let radii = radius_range(parse_value(start)?, parse_value(stop)?, parse_value(step)?)?;
    validate_radii(&radii)?;
    Ok(radii)
}

/// Resolves the radius list from the mutually exclusive CLI options.
pub fn resolve(list: Option<&str>, range: Option<&str>, default_range: &str) -> Result<Vec<f64>> {
    match (list, range) {
        (Some(_), Some(_)) => Err(CliError::InvalidArgument(
            "--radii and --range are mutually exclusive".to_string(),
        )),
        (Some(list), None) => parse_list(list),
        (None, Some(range)) => parse_range(range),
        (None, None) => parse_range(default_range),
    }
}
