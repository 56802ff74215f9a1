//! Scattering inside a disk.
use mint::Vector2;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::warn;

use crate::error::{require_positive, InvalidParameter, Result};
use crate::region::{Region, Shape};
use crate::sampling::poisson_disk::{DEFAULT_CANDIDATES_PER_POINT, DEFAULT_MAX_SEED_ATTEMPTS};
use crate::sampling::SamplerParams;
use crate::scatter::events::EventSink;
use crate::scatter::{run_scatter, target_count_from, validate_border_margin, ScatterResult};

/// Configuration for scattering disks of `scatter_radius` inside a disk of `disk_radius`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiskScatter {
    /// Radius of the outer disk in world units.
    pub disk_radius: f32,
    /// Radius of each scattered object in world units.
    pub scatter_radius: f32,
    /// Fraction of the disk area the scattered objects should cover.
    pub fill_fraction: f32,
    /// Extra clearance between scattered objects and the outer edge.
    pub border_margin: f32,
    /// Let scattered objects overlap the outer edge.
    pub allow_disks_on_boundary: bool,
    /// Candidates drawn around each active point.
    pub candidates_per_point: usize,
    /// Cap on random draws while looking for the seed point.
    pub max_seed_attempts: usize,
}

impl Default for DiskScatter {
    fn default() -> Self {
        Self {
            disk_radius: 350.0,
            scatter_radius: 10.0,
            fill_fraction: 0.35,
            border_margin: 0.0,
            allow_disks_on_boundary: false,
            candidates_per_point: DEFAULT_CANDIDATES_PER_POINT,
            max_seed_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
        }
    }
}

impl DiskScatter {
    pub fn new(disk_radius: f32, scatter_radius: f32, fill_fraction: f32) -> Self {
        Self {
            disk_radius,
            scatter_radius,
            fill_fraction,
            ..Default::default()
        }
    }

    pub fn with_border_margin(mut self, border_margin: f32) -> Self {
        self.border_margin = border_margin;
        self
    }

    pub fn with_disks_on_boundary(mut self, allow: bool) -> Self {
        self.allow_disks_on_boundary = allow;
        self
    }

    pub fn with_candidates_per_point(mut self, candidates_per_point: usize) -> Self {
        self.candidates_per_point = candidates_per_point;
        self
    }

    pub fn with_max_seed_attempts(mut self, max_seed_attempts: usize) -> Self {
        self.max_seed_attempts = max_seed_attempts;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        require_positive(self.disk_radius, InvalidParameter::DiskRadius)?;
        require_positive(self.scatter_radius, InvalidParameter::ScatterRadius)?;
        require_positive(self.fill_fraction, InvalidParameter::FillFraction)?;
        validate_border_margin(self.border_margin)?;
        if self.candidates_per_point == 0 {
            return Err(InvalidParameter::CandidatesPerPoint.into());
        }
        if self.max_seed_attempts == 0 {
            return Err(InvalidParameter::MaxSeedAttempts.into());
        }
        Ok(())
    }

    /// `floor(R^2 * fill_fraction / r^2)`.
    pub fn target_count(&self) -> Result<usize> {
        self.validate()?;
        let disk_radius = f64::from(self.disk_radius);
        let scatter_radius = f64::from(self.scatter_radius);
        target_count_from(
            disk_radius * disk_radius * f64::from(self.fill_fraction)
                / (scatter_radius * scatter_radius),
        )
    }

    /// Normalized minimum distance, `1 / sqrt(2 * target_count)`.
    pub fn min_distance(&self) -> Result<f32> {
        let count = self.target_count()?;
        Ok((1.0 / (2.0 * count as f64).sqrt()) as f32)
    }

    /// Minimum distance between returned points in world units.
    pub fn world_min_distance(&self) -> Result<f32> {
        Ok(self.min_distance()? * self.region().world_scale().x)
    }

    pub fn region(&self) -> Region {
        Region::new(
            Shape::Disk {
                radius: self.disk_radius,
            },
            self.scatter_radius,
            self.border_margin,
        )
    }

    /// Fill fraction implied by `count` points, the inverse of [`Self::target_count`].
    pub fn achieved_fill_fraction(&self, count: usize) -> f32 {
        count as f32 * self.scatter_radius * self.scatter_radius
            / (self.disk_radius * self.disk_radius)
    }

    fn sampler_params(&self) -> Result<SamplerParams> {
        let target_count = self.target_count()?;
        if self.fill_fraction > 1.0 {
            warn!(
                "fill_fraction {} exceeds 1; {} points are unlikely to fit.",
                self.fill_fraction, target_count
            );
        }
        Ok(SamplerParams::new(self.min_distance()?, target_count)
            .with_candidates_per_point(self.candidates_per_point)
            .with_disks_on_boundary(self.allow_disks_on_boundary)
            .with_max_seed_attempts(self.max_seed_attempts))
    }

    /// Runs with a generator seeded from `seed`.
    pub fn run(&self, seed: u64) -> Result<ScatterResult> {
        self.run_with_events(seed, &mut ())
    }

    pub fn run_with_events(&self, seed: u64, sink: &mut dyn EventSink) -> Result<ScatterResult> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.run_with_rng(&mut rng, sink)
    }

    /// Runs with a caller-supplied generator.
    pub fn run_with_rng<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<ScatterResult> {
        let params = self.sampler_params()?;
        run_scatter(self.region(), params, rng, sink)
    }
}

/// Scatters points inside a disk of `disk_radius` centered on the origin.
///
/// Returns at most `floor(disk_radius^2 * fill_fraction / scatter_radius^2)` points.
pub fn generate_circular(
    seed: u64,
    disk_radius: f32,
    scatter_radius: f32,
    fill_fraction: f32,
    border_margin: f32,
    allow_disks_on_boundary: bool,
) -> Result<Vec<Vector2<f32>>> {
    let result = DiskScatter::new(disk_radius, scatter_radius, fill_fraction)
        .with_border_margin(border_margin)
        .with_disks_on_boundary(allow_disks_on_boundary)
        .run(seed)?;
    Ok(result.into_mint())
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::error::Error;
    use crate::scatter::events::{ScatterEvent, VecSink};
    use crate::scatter::tests::pairwise_min_distance;

    fn scenario_a() -> DiskScatter {
        DiskScatter::new(350.0, 10.0, 0.35)
    }

    #[test]
    fn derived_parameters_follow_area_ratio() {
        let config = scenario_a();
        assert_eq!(config.target_count().unwrap(), 428);
        let expected = 1.0 / (856.0f64).sqrt();
        assert!((config.min_distance().unwrap() as f64 - expected).abs() < 1e-7);
        let world = config.world_min_distance().unwrap();
        assert!((world - expected as f32 * 700.0).abs() < 1e-3);
    }

    #[test]
    fn scenario_a_points_fill_the_disk() {
        let config = scenario_a();
        let result = config.run(1).unwrap();

        assert!(!result.is_empty());
        assert!(result.len() <= config.target_count().unwrap());

        let min_world = config.world_min_distance().unwrap();
        assert!(pairwise_min_distance(&result.points) >= min_world - 1e-3);
        // objects of scatter_radius never overlap at this fill fraction
        assert!(pairwise_min_distance(&result.points) > 2.0 * config.scatter_radius);

        for p in &result.points {
            assert!(p.length() < 350.0);
            assert!(p.length() < 350.0 - 10.0 + 1e-3);
        }
    }

    #[test]
    fn achieved_density_is_close_to_requested() {
        let config = scenario_a();
        let result = config.run(1).unwrap();
        let achieved = config.achieved_fill_fraction(result.len());
        assert!(
            (achieved - 0.35).abs() < 0.03,
            "requested 0.35, achieved {achieved}"
        );
    }

    #[test]
    fn same_seed_same_output() {
        let config = DiskScatter::new(100.0, 4.0, 0.3);
        let a = config.run(42).unwrap();
        let b = config.run(42).unwrap();
        assert_eq!(a.points, b.points);

        let c = config.run(43).unwrap();
        assert_ne!(a.points, c.points);
    }

    #[test]
    fn border_margin_shrinks_the_scatter_area() {
        let config = DiskScatter::new(100.0, 2.0, 0.3).with_border_margin(20.0);
        let result = config.run(7).unwrap();
        assert!(!result.is_empty());
        // usable normalized radius (1 - 22/100) mapped by the net radius (100 - 20)
        let limit = (1.0 - 22.0 / 100.0) * 80.0;
        assert!(result.points.iter().all(|p| p.length() < limit + 1e-3));
    }

    #[test]
    fn disks_on_boundary_reach_closer_to_the_edge() {
        let strict = scenario_a().run(0).unwrap();
        let relaxed = scenario_a().with_disks_on_boundary(true).run(0).unwrap();

        let max_radius = |points: &[Vec2]| points.iter().map(|p| p.length()).fold(0.0, f32::max);
        assert!(max_radius(&strict.points) < 340.0 + 1e-3);
        assert!(max_radius(&relaxed.points) > 340.0);
        assert!(relaxed.points.iter().all(|p| p.length() < 350.0 + 1e-3));
    }

    #[test]
    fn oversized_scatter_radius_is_rejected() {
        let err = DiskScatter::new(10.0, 20.0, 0.5).run(1).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter(InvalidParameter::TargetCount { .. })
        ));
    }

    #[test]
    fn non_positive_inputs_are_rejected() {
        let cases = [
            (DiskScatter::new(0.0, 1.0, 0.3), "disk_radius"),
            (DiskScatter::new(10.0, -1.0, 0.3), "scatter_radius"),
            (DiskScatter::new(10.0, 1.0, 0.0), "fill_fraction"),
            (
                DiskScatter::new(10.0, 1.0, 0.3).with_border_margin(-1.0),
                "border_margin",
            ),
        ];
        for (config, name) in cases {
            let err = config.run(1).unwrap_err();
            assert!(err.to_string().contains(name), "{name}: {err}");
        }
    }

    #[test]
    fn margin_consuming_the_disk_reports_region_too_small() {
        let err = DiskScatter::new(10.0, 1.0, 0.3)
            .with_border_margin(9.5)
            .with_max_seed_attempts(100)
            .run(1)
            .unwrap_err();
        assert!(matches!(err, Error::RegionTooSmall { attempts: 100 }));
    }

    #[test]
    fn events_frame_the_run() {
        let mut sink = VecSink::new();
        let result = scenario_a().run_with_events(3, &mut sink).unwrap();
        let events = sink.into_inner();

        assert!(matches!(
            events.first(),
            Some(ScatterEvent::RunStarted {
                target_count: 428,
                ..
            })
        ));
        match events.last() {
            Some(ScatterEvent::RunFinished { accepted, .. }) => {
                assert_eq!(*accepted, result.len())
            }
            other => panic!("unexpected last event {other:?}"),
        }
    }

    #[test]
    fn generate_circular_matches_config_run() {
        let points = generate_circular(5, 200.0, 5.0, 0.2, 0.0, false).unwrap();
        let result = DiskScatter::new(200.0, 5.0, 0.2).run(5).unwrap();
        assert_eq!(points.len(), result.len());
        assert_eq!(Vec2::from(points[0]), result.points[0]);
    }
}
