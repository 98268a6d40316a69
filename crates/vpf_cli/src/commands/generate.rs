//! Generate command implementation
//!
//! Writes a catalogue of points drawn uniformly from the unit cube.

use std::path::Path;
use tracing::info;
use vpf_kernel::input::uniform_catalogue;
use vpf_kernel::rng::VpfRng;

use crate::catalogue::write_catalogue;
use crate::{CliError, Result};

/// Run the generate command
pub fn run(points: usize, seed: Option<u64>, output: &Path) -> Result<()> {
    if points == 0 {
        return Err(CliError::InvalidArgument(
            "--points must be greater than 0".to_string(),
        ));
    }

    let mut rng = seed.map_or_else(VpfRng::from_entropy, VpfRng::from_seed);
    let galaxies = uniform_catalogue(&mut rng, points);
    write_catalogue(output, &galaxies)?;

    info!(
        points,
        seed = rng.seed(),
        path = %output.display(),
        "uniform catalogue written"
    );
    Ok(())
}
