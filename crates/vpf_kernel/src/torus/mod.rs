//! Toroidal distance transform for the periodic unit cube.
//!
//! The box [0, 1)³ has its opposite faces identified, making it a 3-torus.
//! Rather than enumerating the 26 periodic images of every point, the
//! transform works from the trial sphere's side: for each axis it records
//! how far the sphere pokes through a face (the boundary shift), and only
//! galaxies whose coordinate falls in that overlap interval are folded
//! back into the sphere's frame.
//!
//! # Precondition
//!
//! The single-crossing argument needs `radius < 0.5`: a smaller sphere can
//! cross at most one face per axis. For larger radii [`boundary_shift`]
//! still returns a value (the far face wins), but distances near the
//! opposite face are no longer guaranteed to be minimal.
//!
//! # Examples
//!
//! ```rust
//! use vpf_kernel::torus::{toroidal_distance, ShiftVector};
//!
//! // Sphere straddling the x = 0 face; galaxy just inside the x = 1 face.
//! let centre = [0.02, 0.5, 0.5];
//! let shift = ShiftVector::new(centre, 0.05);
//! let d = toroidal_distance(centre, [0.99, 0.5, 0.5], &shift);
//!
//! assert!((d - 0.03).abs() < 1e-12);
//! ```

/// A point in the unit cube, `[x, y, z]`.
pub type Point3 = [f64; 3];

/// Computes the overlap of a sphere with the box along one axis.
///
/// Returns the overshoot `coord + radius - 1` when the sphere reaches the
/// far face, the (negative) undershoot `coord - radius` when it crosses
/// the near face, and `0.0` otherwise.
///
/// # Examples
///
/// ```rust
/// use vpf_kernel::torus::boundary_shift;
///
/// assert_eq!(boundary_shift(0.5, 0.1), 0.0);
/// assert!((boundary_shift(0.98, 0.05) - 0.03).abs() < 1e-12);
/// assert!((boundary_shift(0.02, 0.05) + 0.03).abs() < 1e-12);
/// ```
#[inline]
pub fn boundary_shift(coord: f64, radius: f64) -> f64 {
    if coord + radius >= 1.0 {
        coord + radius - 1.0
    } else if coord - radius < 0.0 {
        coord - radius
    } else {
        0.0
    }
}

/// Returns `true` if a coordinate lies in the overlap interval of `shift`.
///
/// The coordinate is in the overlap interval when subtracting the shift
/// moves it outside [0, 1). A zero shift never triggers for coordinates
/// already inside the box.
#[inline]
pub fn needs_wrap(coord: f64, shift: f64) -> bool {
    let shifted = coord - shift;
    !(0.0..1.0).contains(&shifted)
}

/// Folds a shifted coordinate back across the face it has crossed.
#[inline]
fn reflect(shifted: f64) -> f64 {
    if shifted < 0.0 {
        shifted + 1.0
    } else {
        shifted - 1.0
    }
}

/// Per-axis boundary shifts of one trial sphere.
///
/// Computed once per sphere and reused for every galaxy tested against it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShiftVector {
    shifts: [f64; 3],
}

impl ShiftVector {
    /// Computes the shift on all three axes for a sphere at `centre`.
    #[inline]
    pub fn new(centre: Point3, radius: f64) -> Self {
        Self {
            shifts: [
                boundary_shift(centre[0], radius),
                boundary_shift(centre[1], radius),
                boundary_shift(centre[2], radius),
            ],
        }
    }

    /// Returns the `[x, y, z]` shifts.
    #[inline]
    pub fn components(&self) -> [f64; 3] {
        self.shifts
    }

    /// Returns `true` if the sphere lies entirely inside the box.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.shifts.iter().all(|&s| s == 0.0)
    }

    /// Returns `true` if any axis of `galaxy` lies in its overlap interval.
    ///
    /// Axes are tested x, then y, then z, stopping at the first hit.
    #[inline]
    pub fn needs_wrap(&self, galaxy: Point3) -> bool {
        galaxy
            .iter()
            .zip(self.shifts.iter())
            .any(|(&coord, &shift)| needs_wrap(coord, shift))
    }
}

/// Distance from the sphere centre to a galaxy in the overlap region.
///
/// On each axis the galaxy coordinate is shifted by that axis's boundary
/// shift; if the result left the box it is reflected across the crossed
/// face, and the shift is added back when forming the offset from the
/// centre. Axes whose shifted coordinate stays inside the box contribute
/// their direct offset, so a zero shift leaves an axis untouched.
#[inline]
pub fn wrapped_distance(centre: Point3, galaxy: Point3, shift: &ShiftVector) -> f64 {
    let mut sum_sq = 0.0;
    for axis in 0..3 {
        let s = shift.shifts[axis];
        let shifted = galaxy[axis] - s;
        let image = if (0.0..1.0).contains(&shifted) {
            shifted
        } else {
            reflect(shifted)
        };
        let d = image - centre[axis] + s;
        sum_sq += d * d;
    }
    sum_sq.sqrt()
}

/// Plain Euclidean distance, for galaxies that need no wrapping.
#[inline]
pub fn plain_distance(centre: Point3, galaxy: Point3) -> f64 {
    let dx = galaxy[0] - centre[0];
    let dy = galaxy[1] - centre[1];
    let dz = galaxy[2] - centre[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Distance from a trial sphere centre to a galaxy on the 3-torus.
///
/// Takes the wrapped path when any axis of the galaxy lies in the sphere's
/// overlap interval and the plain Euclidean path otherwise. For
/// `radius < 0.5` the result equals [`minimum_image_distance`] whenever
/// that distance is below the radius, and is never smaller than it.
#[inline]
pub fn toroidal_distance(centre: Point3, galaxy: Point3, shift: &ShiftVector) -> f64 {
    if shift.needs_wrap(galaxy) {
        wrapped_distance(centre, galaxy, shift)
    } else {
        plain_distance(centre, galaxy)
    }
}

/// Reference periodic distance using the minimum-image convention.
///
/// Independent of any sphere radius. Slower than [`toroidal_distance`]
/// because it rounds every axis; used to validate the transform.
#[inline]
pub fn minimum_image_distance(a: Point3, b: Point3) -> f64 {
    let mut sum_sq = 0.0;
    for axis in 0..3 {
        let mut d = b[axis] - a[axis];
        d -= d.round();
        sum_sq += d * d;
    }
    sum_sq.sqrt()
}
