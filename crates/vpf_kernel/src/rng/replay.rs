//! Scripted uniform source for deterministic scenarios.

use super::UniformSource;

/// Replays a fixed list of values, cycling back to the start when exhausted.
///
/// Stands in for a real generator where the exact trial sphere centres
/// must be known in advance. Values are returned as given; callers are
/// responsible for keeping them in [0, 1).
///
/// # Examples
///
/// ```rust
/// use vpf_kernel::rng::{ReplaySource, UniformSource};
///
/// let mut source = ReplaySource::new(vec![0.1, 0.2]);
/// assert_eq!(source.uniform_double(), 0.1);
/// assert_eq!(source.uniform_double(), 0.2);
/// assert_eq!(source.uniform_double(), 0.1);
/// ```
#[derive(Clone, Debug)]
pub struct ReplaySource {
    values: Vec<f64>,
    position: usize,
}

impl ReplaySource {
    /// Creates a source replaying `values` in order.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "ReplaySource requires at least one value");
        Self {
            values,
            position: 0,
        }
    }

    /// Creates a source that places every trial sphere at `centre`.
    pub fn fixed_centre(centre: [f64; 3]) -> Self {
        Self::new(centre.to_vec())
    }

    /// Returns the number of values drawn so far.
    #[inline]
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl UniformSource for ReplaySource {
    #[inline]
    fn uniform_double(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
