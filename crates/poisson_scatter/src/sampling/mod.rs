//! Poisson-disk sampling in the unit square.
//!
//! This module holds the spatial grid used for neighbor rejection and the dart-throwing
//! sampler that grows a point set from a single seed. Drivers in [`crate::scatter`] derive
//! the sampler parameters from physical inputs and rescale the output to world units.
use rand::RngCore;

pub mod grid;
pub mod poisson_disk;

pub use grid::CellGrid;
pub use poisson_disk::{PoissonDiskSampler, SamplerOutput, SamplerParams};

/// Generate a random float in the half-open range [0, 1).
///
/// Uses the top 24 bits of a `u32` draw so every result is exactly representable.
#[inline]
pub(crate) fn rand01<R: RngCore + ?Sized>(rng: &mut R) -> f32 {
    (rng.next_u32() >> 8) as f32 / 16_777_216.0
}

/// Pick a uniform index in `0..len` with a multiply-shift reduction.
#[inline]
pub(crate) fn rand_index<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0, "rand_index needs a non-empty range");
    ((u64::from(rng.next_u32()) * len as u64) >> 32) as usize
}
