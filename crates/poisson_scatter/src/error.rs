//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! rejected input parameters and regions too small to hold a single sample.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameter),

    #[error("no seed point found inside the region after {attempts} attempts")]
    RegionTooSmall { attempts: usize },
}

/// A single rejected input, one variant per parameter.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidParameter {
    #[error("disk_radius must be finite and > 0, got {0}")]
    DiskRadius(f32),

    #[error("width must be finite and > 0, got {0}")]
    Width(f32),

    #[error("height must be finite and > 0, got {0}")]
    Height(f32),

    #[error("scatter_radius must be finite and > 0, got {0}")]
    ScatterRadius(f32),

    #[error("fill_fraction must be finite and > 0, got {0}")]
    FillFraction(f32),

    #[error("border_margin must be finite and >= 0, got {0}")]
    BorderMargin(f32),

    #[error("min_distance must be finite and > 0, got {0}")]
    MinDistance(f32),

    #[error("candidates_per_point must be >= 1")]
    CandidatesPerPoint,

    #[error("max_seed_attempts must be >= 1")]
    MaxSeedAttempts,

    #[error("parameters yield a target count of {derived:.3}, need at least one point")]
    TargetCount { derived: f64 },
}

/// Rejects non-finite or non-positive values with the given error kind.
pub(crate) fn require_positive(value: f32, kind: fn(f32) -> InvalidParameter) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(kind(value).into())
    }
}
