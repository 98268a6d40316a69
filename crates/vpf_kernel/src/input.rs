//! Caller-side validation of catalogues and radius lists.
//!
//! The estimator itself trusts its inputs. Anything arriving from outside
//! (files, Python arrays, command-line arguments) should pass through these
//! checks first.

use thiserror::Error;
use tracing::warn;

use crate::rng::UniformSource;
use crate::torus::Point3;

/// Radius above which a sphere may cross both faces of an axis.
pub const SINGLE_CROSSING_LIMIT: f64 = 0.5;

/// Maximum number of radii a single range may generate.
pub const MAX_RADII: usize = 1_000_000;

/// Invalid catalogue or radius list.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InputError {
    /// Coordinate columns of different lengths.
    #[error("Coordinate columns differ in length: x={x}, y={y}, z={z}")]
    LengthMismatch {
        /// Length of the x column.
        x: usize,
        /// Length of the y column.
        y: usize,
        /// Length of the z column.
        z: usize,
    },

    /// Coordinate outside [0, 1) or not finite.
    #[error("Galaxy {index}: {axis} coordinate {value} is outside [0, 1)")]
    CoordinateOutOfRange {
        /// Galaxy index in the catalogue.
        index: usize,
        /// Axis name.
        axis: char,
        /// Offending value.
        value: f64,
    },

    /// Radius not finite or not positive.
    #[error("Radius {index}: {value} must be finite and positive")]
    InvalidRadius {
        /// Index in the radius list.
        index: usize,
        /// Offending value.
        value: f64,
    },

    /// Malformed radius range.
    #[error("Invalid radius range: {0}")]
    InvalidRange(String),
}

/// Checks that every coordinate is finite and in [0, 1).
///
/// # Errors
///
/// Returns the first offending coordinate.
pub fn validate_catalogue(galaxies: &[Point3]) -> Result<(), InputError> {
    for (index, galaxy) in galaxies.iter().enumerate() {
        for (&value, axis) in galaxy.iter().zip(['x', 'y', 'z']) {
            if !(0.0..1.0).contains(&value) {
                return Err(InputError::CoordinateOutOfRange { index, axis, value });
            }
        }
    }
    Ok(())
}

/// Builds a validated catalogue from three coordinate columns.
///
/// # Examples
///
/// ```rust
/// use vpf_kernel::input::catalogue_from_columns;
///
/// let galaxies = catalogue_from_columns(&[0.1, 0.2], &[0.3, 0.4], &[0.5, 0.6]).unwrap();
/// assert_eq!(galaxies, vec![[0.1, 0.3, 0.5], [0.2, 0.4, 0.6]]);
///
/// assert!(catalogue_from_columns(&[0.1], &[0.3, 0.4], &[0.5]).is_err());
/// ```
///
/// # Errors
///
/// Returns `InputError::LengthMismatch` for ragged columns and
/// `InputError::CoordinateOutOfRange` for values outside [0, 1).
pub fn catalogue_from_columns(x: &[f64], y: &[f64], z: &[f64]) -> Result<Vec<Point3>, InputError> {
    if x.len() != y.len() || x.len() != z.len() {
        return Err(InputError::LengthMismatch {
            x: x.len(),
            y: y.len(),
            z: z.len(),
        });
    }

    let galaxies: Vec<Point3> = x
        .iter()
        .zip(y.iter())
        .zip(z.iter())
        .map(|((&x, &y), &z)| [x, y, z])
        .collect();

    validate_catalogue(&galaxies)?;
    Ok(galaxies)
}

/// Checks that every radius is finite and positive.
///
/// Radii of 0.5 or more are accepted but logged: a sphere that large can
/// overlap both faces of an axis at once, and the boundary transform then
/// only accounts for the far face.
///
/// # Errors
///
/// Returns the first non-positive or non-finite radius.
pub fn validate_radii(radii: &[f64]) -> Result<(), InputError> {
    for (index, &value) in radii.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(InputError::InvalidRadius { index, value });
        }
        if value >= SINGLE_CROSSING_LIMIT {
            warn!(
                index,
                radius = value,
                "radius >= 0.5: periodic distances may be overestimated"
            );
        }
    }
    Ok(())
}

/// Generates `start, start + step, ...` up to but excluding `stop`.
///
/// Values within `1e-9 * step` of `stop` are treated as reaching it, so
/// rounding in `stop - start` cannot add a trailing radius.
///
/// # Examples
///
/// ```rust
/// use vpf_kernel::input::radius_range;
///
/// let radii = radius_range(0.1, 0.4, 0.1).unwrap();
/// assert_eq!(radii.len(), 3);
/// ```
///
/// # Errors
///
/// Returns `InputError::InvalidRange` if `step` is not positive, any
/// bound is not finite, or the range would hold more than [`MAX_RADII`]
/// values, and `InputError::InvalidRadius` if `start` is not positive.
pub fn radius_range(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, InputError> {
    if !start.is_finite() || !stop.is_finite() || !step.is_finite() || step <= 0.0 {
        return Err(InputError::InvalidRange(format!(
            "start={}, stop={}, step={}",
            start, stop, step
        )));
    }
    if start <= 0.0 {
        return Err(InputError::InvalidRadius {
            index: 0,
            value: start,
        });
    }

    let limit = stop - step * 1e-9;
    let count = ((limit - start) / step).ceil().max(0.0);
    if !count.is_finite() || count > MAX_RADII as f64 {
        return Err(InputError::InvalidRange(format!(
            "{}:{}:{} yields more than {} radii",
            start, stop, step, MAX_RADII
        )));
    }
    let count = count as usize;
    Ok((0..count).map(|i| start + i as f64 * step).collect())
}

/// Draws a catalogue of `n` points uniformly from the unit cube.
pub fn uniform_catalogue<S: UniformSource + ?Sized>(source: &mut S, n: usize) -> Vec<Point3> {
    (0..n)
        .map(|_| {
            [
                source.uniform_double(),
                source.uniform_double(),
                source.uniform_double(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::VpfRng;
    use approx::assert_relative_eq;

    #[test]
    fn test_validate_catalogue_ok() {
        assert!(validate_catalogue(&[[0.0, 0.5, 0.999_999]]).is_ok());
        assert!(validate_catalogue(&[]).is_ok());
    }

    #[test]
    fn test_validate_catalogue_rejects_one() {
        let err = validate_catalogue(&[[0.1, 0.1, 0.1], [0.2, 1.0, 0.2]]).unwrap_err();
        assert_eq!(
            err,
            InputError::CoordinateOutOfRange {
                index: 1,
                axis: 'y',
                value: 1.0
            }
        );
    }

    #[test]
    fn test_validate_catalogue_rejects_negative_and_nan() {
        assert!(validate_catalogue(&[[-0.01, 0.1, 0.1]]).is_err());
        assert!(validate_catalogue(&[[0.1, 0.1, f64::NAN]]).is_err());
    }

    #[test]
    fn test_catalogue_from_columns_mismatch() {
        let err = catalogue_from_columns(&[0.1, 0.2], &[0.1], &[0.1, 0.2]).unwrap_err();
        assert_eq!(err, InputError::LengthMismatch { x: 2, y: 1, z: 2 });
    }

    #[test]
    fn test_validate_radii() {
        assert!(validate_radii(&[0.01, 0.2, 0.49]).is_ok());
        assert!(validate_radii(&[]).is_ok());
        // Large radii are accepted with a warning.
        assert!(validate_radii(&[0.6]).is_ok());

        assert!(matches!(
            validate_radii(&[0.1, 0.0]),
            Err(InputError::InvalidRadius { index: 1, .. })
        ));
        assert!(validate_radii(&[-0.1]).is_err());
        assert!(validate_radii(&[f64::INFINITY]).is_err());
    }

    #[test]
    fn test_radius_range() {
        let radii = radius_range(0.05, 0.2, 0.05).unwrap();
        assert_eq!(radii.len(), 3);
        assert_relative_eq!(radii[0], 0.05);
        assert_relative_eq!(radii[2], 0.15, epsilon = 1e-12);

        assert!(radius_range(0.3, 0.1, 0.05).unwrap().is_empty());
    }

    #[test]
    fn test_radius_range_invalid() {
        assert!(matches!(
            radius_range(0.1, 0.2, 0.0),
            Err(InputError::InvalidRange(_))
        ));
        assert!(matches!(
            radius_range(0.0, 0.2, 0.1),
            Err(InputError::InvalidRadius { .. })
        ));
    }

    #[test]
    fn test_radius_range_too_many_values() {
        assert!(matches!(
            radius_range(1e-12, 0.35, 1e-15),
            Err(InputError::InvalidRange(_))
        ));
        // Overflows to infinity before the cast.
        assert!(matches!(
            radius_range(1e-300, 1e300, 1e-300),
            Err(InputError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_radius_range_at_limit() {
        let step = 1e-6;
        let radii = radius_range(step, step * (MAX_RADII as f64 + 1.0), step).unwrap();
        assert_eq!(radii.len(), MAX_RADII);
    }

    #[test]
    fn test_uniform_catalogue() {
        let mut rng = VpfRng::from_seed(3);
        let galaxies = uniform_catalogue(&mut rng, 500);

        assert_eq!(galaxies.len(), 500);
        assert!(validate_catalogue(&galaxies).is_ok());
    }
}
