//! Distribution drivers that turn physical scatter parameters into world-space points.
//!
//! A driver validates its configuration, derives the target count and normalized minimum
//! distance, runs [`crate::sampling::PoissonDiskSampler`] on the unit square and maps the
//! accepted samples into world coordinates centered on the region.
//!
//! Object-level collision between scattered disks is left to the caller; the drivers only
//! guarantee the normalized minimum spacing.
use glam::Vec2;
use mint::Vector2;
use rand::RngCore;
use tracing::info;

use crate::error::{InvalidParameter, Result};
use crate::region::Region;
use crate::sampling::{PoissonDiskSampler, SamplerParams};
use crate::scatter::events::{EventSink, ScatterEvent};

pub mod disk;
pub mod events;
pub mod rect;

pub use disk::{generate_circular, DiskScatter};
pub use rect::{generate_rectangular, RectScatter};

/// Result of a scatter run.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterResult {
    /// Accepted points in world coordinates, in acceptance order.
    pub points: Vec<Vec2>,
    /// Maximum number of points the run would accept.
    pub target_count: usize,
    /// Minimum spacing in the normalized unit square.
    pub min_distance: f32,
    /// Candidates drawn around active points.
    pub candidates_evaluated: usize,
    /// Candidates rejected by the region or the spacing test.
    pub candidates_rejected: usize,
    /// True if sampling ran out of room before reaching `target_count`.
    pub exhausted: bool,
}

impl ScatterResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as engine-agnostic `mint` vectors.
    pub fn into_mint(self) -> Vec<Vector2<f32>> {
        self.points.into_iter().map(Into::into).collect()
    }
}

/// Converts a derived point count into a target, rejecting anything below one.
pub(crate) fn target_count_from(derived: f64) -> Result<usize> {
    let count = derived.floor();
    if count.is_finite() && count >= 1.0 {
        Ok(count as usize)
    } else {
        Err(InvalidParameter::TargetCount { derived }.into())
    }
}

pub(crate) fn validate_border_margin(border_margin: f32) -> Result<()> {
    if border_margin.is_finite() && border_margin >= 0.0 {
        Ok(())
    } else {
        Err(InvalidParameter::BorderMargin(border_margin).into())
    }
}

/// Runs the sampler for `region` and rescales its output to world units.
pub(crate) fn run_scatter<R: RngCore + ?Sized>(
    region: Region,
    params: SamplerParams,
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> Result<ScatterResult> {
    let world_min_distance = params.min_distance * region.world_scale().x;
    info!(
        "Target points: {} | scatter diameter: {} | min distance: {}.",
        params.target_count,
        region.scatter_radius * 2.0,
        world_min_distance,
    );
    sink.send(ScatterEvent::RunStarted {
        shape: region.shape,
        target_count: params.target_count,
        min_distance: params.min_distance,
        world_min_distance,
    });

    let output = PoissonDiskSampler::try_new(region, params)?.generate_with_events(rng, sink)?;

    info!(
        "{} points generated ({} candidates, {} rejected).",
        output.points.len(),
        output.candidates_evaluated,
        output.candidates_rejected,
    );
    sink.send(ScatterEvent::RunFinished {
        accepted: output.points.len(),
        target_count: params.target_count,
        exhausted: output.exhausted,
    });

    Ok(ScatterResult {
        points: output
            .points
            .into_iter()
            .map(|p| region.to_world(p))
            .collect(),
        target_count: params.target_count,
        min_distance: params.min_distance,
        candidates_evaluated: output.candidates_evaluated,
        candidates_rejected: output.candidates_rejected,
        exhausted: output.exhausted,
    })
}
