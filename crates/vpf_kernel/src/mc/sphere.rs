//! Trial spheres placed in the periodic box.

use crate::rng::UniformSource;
use crate::torus::{toroidal_distance, Point3, ShiftVector};

/// A randomly placed probe sphere with its boundary shifts precomputed.
///
/// # Examples
///
/// ```rust
/// use vpf_kernel::mc::TrialSphere;
///
/// let sphere = TrialSphere::new([0.02, 0.5, 0.5], 0.05);
///
/// // Occupied through the x = 0 face.
/// assert!(sphere.contains([0.99, 0.5, 0.5]));
/// assert!(!sphere.is_empty(&[[0.5, 0.5, 0.5], [0.99, 0.5, 0.5]]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialSphere {
    centre: Point3,
    radius: f64,
    shift: ShiftVector,
}

impl TrialSphere {
    /// Creates a sphere at `centre` with the given radius.
    #[inline]
    pub fn new(centre: Point3, radius: f64) -> Self {
        Self {
            centre,
            radius,
            shift: ShiftVector::new(centre, radius),
        }
    }

    /// Places a sphere uniformly at random, drawing x, y then z.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(source: &mut S, radius: f64) -> Self {
        let x = source.uniform_double();
        let y = source.uniform_double();
        let z = source.uniform_double();
        Self::new([x, y, z], radius)
    }

    /// Returns the sphere centre.
    #[inline]
    pub fn centre(&self) -> Point3 {
        self.centre
    }

    /// Returns the sphere radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the precomputed boundary shifts.
    #[inline]
    pub fn shift(&self) -> &ShiftVector {
        &self.shift
    }

    /// Periodic distance from the centre to `galaxy`.
    #[inline]
    pub fn distance_to(&self, galaxy: Point3) -> f64 {
        toroidal_distance(self.centre, galaxy, &self.shift)
    }

    /// Returns `true` if `galaxy` lies strictly inside the sphere.
    #[inline]
    pub fn contains(&self, galaxy: Point3) -> bool {
        self.distance_to(galaxy) < self.radius
    }

    /// Returns `true` if no galaxy lies strictly inside the sphere.
    ///
    /// Stops at the first occupying galaxy.
    #[inline]
    pub fn is_empty(&self, galaxies: &[Point3]) -> bool {
        !galaxies.iter().any(|&galaxy| self.contains(galaxy))
    }
}
