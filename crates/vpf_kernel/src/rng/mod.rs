//! # Random Number Generation
//!
//! The estimator only needs one capability from its random source: a
//! uniform double in [0, 1). That capability is the [`UniformSource`]
//! trait, injected into the sampling loop instead of living in a hidden
//! global, so tests can substitute a scripted sequence and parallel
//! workers can each own an independent stream.
//!
//! ## Module Structure
//!
//! - [`prng`]: [`VpfRng`], a seeded `StdRng` wrapper with child streams
//! - [`replay`]: [`ReplaySource`], a deterministic scripted substitute
//!
//! ## Usage Example
//!
//! ```rust
//! use vpf_kernel::rng::{UniformSource, VpfRng};
//!
//! let mut rng = VpfRng::from_seed(12345);
//! let u = rng.uniform_double();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Entropy-seeded generators remember their seed for replay.
//! let fresh = VpfRng::from_entropy();
//! let mut replay = VpfRng::from_seed(fresh.seed());
//! # let _ = replay.gen_uniform();
//! ```

mod prng;
mod replay;

pub use prng::VpfRng;
pub use replay::ReplaySource;

/// Source of uniform pseudorandom doubles in [0, 1).
///
/// Implementations are used strictly sequentially: one draw at a time,
/// never re-entrantly.
pub trait UniformSource {
    /// Returns the next uniform value in [0, 1).
    fn uniform_double(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn uniform_double(&mut self) -> f64 {
        (**self).uniform_double()
    }
}
