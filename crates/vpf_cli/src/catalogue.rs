//! Galaxy catalogue files.
//!
//! Catalogues are CSV files with a header row naming the `x`, `y` and `z`
//! columns; extra columns are ignored.
//!
//! ```text
//! x,y,z
//! 0.125,0.5,0.875
//! 0.99,0.01,0.4
//! ```

use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;
use vpf_kernel::input::validate_catalogue;
use vpf_kernel::Point3;

use crate::{CliError, Result};

#[derive(Debug, Deserialize, Serialize)]
struct GalaxyRecord {
    x: f64,
    y: f64,
    z: f64,
}

/// Reads and validates a catalogue from any CSV source.
pub fn read_catalogue_from<R: Read>(reader: R) -> Result<Vec<Point3>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut galaxies = Vec::new();
    for record in csv_reader.deserialize() {
        let GalaxyRecord { x, y, z } = record?;
        galaxies.push([x, y, z]);
    }

    validate_catalogue(&galaxies)?;
    Ok(galaxies)
}

/// Reads and validates a catalogue file.
pub fn read_catalogue(path: &Path) -> Result<Vec<Point3>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let galaxies = read_catalogue_from(std::fs::File::open(path)?)?;
    debug!(path = %path.display(), n_galaxies = galaxies.len(), "loaded catalogue");
    Ok(galaxies)
}

/// Writes a catalogue as CSV.
pub fn write_catalogue_to<W: Write>(writer: W, galaxies: &[Point3]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for &[x, y, z] in galaxies {
        csv_writer.serialize(GalaxyRecord { x, y, z })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes a catalogue file.
pub fn write_catalogue(path: &Path, galaxies: &[Point3]) -> Result<()> {
    write_catalogue_to(std::fs::File::create(path)?, galaxies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_catalogue_with_extra_columns() {
        let text = "id,x,y,z\n1, 0.1, 0.2, 0.3\n2,0.9,0.8,0.7\n";
        let galaxies = read_catalogue_from(text.as_bytes()).unwrap();

        assert_eq!(galaxies, vec![[0.1, 0.2, 0.3], [0.9, 0.8, 0.7]]);
    }

    #[test]
    fn test_read_catalogue_rejects_out_of_box() {
        let text = "x,y,z\n0.1,0.2,1.5\n";
        let err = read_catalogue_from(text.as_bytes()).unwrap_err();

        assert!(matches!(err, CliError::Input(_)));
    }

    #[test]
    fn test_read_catalogue_rejects_garbage() {
        let text = "x,y,z\n0.1,abc,0.3\n";
        assert!(matches!(
            read_catalogue_from(text.as_bytes()),
            Err(CliError::Csv(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_catalogue(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogue.csv");
        let galaxies = vec![[0.0, 0.5, 0.25], [0.75, 0.125, 0.999]];

        write_catalogue(&path, &galaxies).unwrap();
        assert_eq!(read_catalogue(&path).unwrap(), galaxies);
    }
}
