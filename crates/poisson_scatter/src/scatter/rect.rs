//! Scattering inside an axis-aligned rectangle.
use std::f64::consts::PI;

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

/// Packing constant for rectangles; the spacing is `1 / sqrt(RECT_PACKING * target_count)`.
pub const RECT_PACKING: f64 = 1.55;

/// Configuration for scattering disks of `scatter_radius` inside a `width` x `height` rectangle.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RectScatter {
    /// Rectangle width in world units.
    pub width: f32,
    /// Rectangle height in world units.
    pub height: f32,
    /// Radius of each scattered object in world units.
    pub scatter_radius: f32,
    /// Fraction of the rectangle area the scattered objects should cover.
    pub fill_fraction: f32,
    /// Extra clearance between scattered objects and the edges.
    pub border_margin: f32,
    /// Let scattered objects overlap the edges.
    pub allow_disks_on_boundary: bool,
    /// Candidates drawn around each active point.
    pub candidates_per_point: usize,
    /// Cap on random draws while looking for the seed point.
    pub max_seed_attempts: usize,
}

impl Default for RectScatter {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 700.0,
            scatter_radius: 10.0,
            fill_fraction: 0.35,
            border_margin: 0.0,
            allow_disks_on_boundary: false,
            candidates_per_point: DEFAULT_CANDIDATES_PER_POINT,
            max_seed_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
        }
    }
}

impl RectScatter {
    pub fn new(width: f32, height: f32, scatter_radius: f32, fill_fraction: f32) -> Self {
        Self {
            width,
            height,
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
        require_positive(self.width, InvalidParameter::Width)?;
        require_positive(self.height, InvalidParameter::Height)?;
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

    /// `floor(w * h * fill_fraction / (pi * r^2))`.
    pub fn target_count(&self) -> Result<usize> {
        self.validate()?;
        let scatter_radius = f64::from(self.scatter_radius);
        target_count_from(
            f64::from(self.width) * f64::from(self.height) * f64::from(self.fill_fraction)
                / (scatter_radius * scatter_radius * PI),
        )
    }

    /// Normalized minimum distance, `1 / sqrt(1.55 * target_count)`.
    pub fn min_distance(&self) -> Result<f32> {
        let count = self.target_count()?;
        Ok((1.0 / (RECT_PACKING * count as f64).sqrt()) as f32)
    }

    /// Minimum distance between returned points along x in world units.
    ///
    /// Spacing is only isotropic in world units when width equals height.
    pub fn world_min_distance(&self) -> Result<f32> {
        Ok(self.min_distance()? * self.region().world_scale().x)
    }

    pub fn region(&self) -> Region {
        Region::new(
            Shape::Rectangle {
                width: self.width,
                height: self.height,
            },
            self.scatter_radius,
            self.border_margin,
        )
    }

    /// Fill fraction implied by `count` points, the inverse of [`Self::target_count`].
    pub fn achieved_fill_fraction(&self, count: usize) -> f32 {
        count as f32 * std::f32::consts::PI * self.scatter_radius * self.scatter_radius
            / (self.width * self.height)
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

/// Scatters points inside a `width` x `height` rectangle centered on the origin.
///
/// Returns at most `floor(width * height * fill_fraction / (pi * scatter_radius^2))` points.
pub fn generate_rectangular(
    seed: u64,
    width: f32,
    height: f32,
    scatter_radius: f32,
    fill_fraction: f32,
    border_margin: f32,
    allow_disks_on_boundary: bool,
) -> Result<Vec<Vector2<f32>>> {
    let result = RectScatter::new(width, height, scatter_radius, fill_fraction)
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
    use crate::scatter::tests::pairwise_min_distance;

    fn scenario_b() -> RectScatter {
        RectScatter::new(100.0, 100.0, 5.0, 0.3)
    }

    fn max_extent(points: &[Vec2]) -> f32 {
        points
            .iter()
            .map(|p| p.x.abs().max(p.y.abs()))
            .fold(0.0, f32::max)
    }

    #[test]
    fn derived_parameters_use_rect_packing() {
        let config = scenario_b();
        assert_eq!(config.target_count().unwrap(), 38);
        let expected = 1.0 / (1.55f64 * 38.0).sqrt();
        assert!((config.min_distance().unwrap() as f64 - expected).abs() < 1e-7);
    }

    #[test]
    fn scenario_b_points_stay_inside_margin_band() {
        let config = scenario_b();
        let result = config.run(1).unwrap();

        assert!(!result.is_empty());
        assert!(result.len() <= 38);
        // normalized bounds [0.05, 0.95] map to [-45, 45]
        assert!(max_extent(&result.points) <= 45.0 + 1e-3);

        let min_world = config.world_min_distance().unwrap();
        assert!(pairwise_min_distance(&result.points) >= min_world - 1e-3);
    }

    #[test]
    fn achieved_density_is_close_to_requested() {
        let config = RectScatter::new(700.0, 700.0, 10.0, 0.45);
        let result = config.run(1).unwrap();
        let achieved = config.achieved_fill_fraction(result.len());
        assert!(
            (achieved - 0.45).abs() < 0.05,
            "requested 0.45, achieved {achieved}"
        );
    }

    #[test]
    fn non_square_rectangle_keeps_axis_bounds() {
        let config = RectScatter::new(400.0, 200.0, 5.0, 0.3).with_border_margin(10.0);
        let result = config.run(8).unwrap();
        assert!(!result.is_empty());

        // net extents are 390 x 190; clearance is 15 on both axes
        let half_x = (1.0 - 2.0 * 15.0 / 400.0) * 390.0 / 2.0;
        let half_y = (1.0 - 2.0 * 15.0 / 200.0) * 190.0 / 2.0;
        for p in &result.points {
            assert!(p.x.abs() <= half_x + 1e-3, "{p}");
            assert!(p.y.abs() <= half_y + 1e-3, "{p}");
        }
    }

    #[test]
    fn same_seed_same_output() {
        let a = scenario_b().run(9).unwrap();
        let b = scenario_b().run(9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn disks_on_boundary_reach_closer_to_the_edge() {
        let strict = scenario_b().run(2).unwrap();
        let relaxed = scenario_b().with_disks_on_boundary(true).run(2).unwrap();
        assert!(max_extent(&strict.points) <= 45.0 + 1e-3);
        assert!(max_extent(&relaxed.points) > 45.0);
        assert!(max_extent(&relaxed.points) <= 50.0 + 1e-3);
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert!(matches!(
            RectScatter::new(10.0, 10.0, 50.0, 0.3).run(1),
            Err(Error::InvalidParameter(InvalidParameter::TargetCount { .. }))
        ));
        assert!(matches!(
            RectScatter::new(0.0, 10.0, 1.0, 0.3).run(1),
            Err(Error::InvalidParameter(InvalidParameter::Width(_)))
        ));
        assert!(matches!(
            RectScatter::new(10.0, -2.0, 1.0, 0.3).run(1),
            Err(Error::InvalidParameter(InvalidParameter::Height(_)))
        ));
        assert!(matches!(
            RectScatter::new(10.0, 10.0, 1.0, 0.3)
                .with_candidates_per_point(0)
                .run(1),
            Err(Error::InvalidParameter(
                InvalidParameter::CandidatesPerPoint
            ))
        ));
    }

    #[test]
    fn margin_wider_than_rectangle_reports_region_too_small() {
        let err = RectScatter::new(100.0, 10.0, 1.0, 0.3)
            .with_border_margin(5.0)
            .with_max_seed_attempts(64)
            .run(1)
            .unwrap_err();
        assert!(matches!(err, Error::RegionTooSmall { attempts: 64 }));
    }

    #[test]
    fn generate_rectangular_returns_world_points() {
        let points = generate_rectangular(1, 100.0, 100.0, 5.0, 0.3, 0.0, false).unwrap();
        assert!(!points.is_empty());
        assert!(points.iter().all(|p| p.x.abs() <= 50.0 && p.y.abs() <= 50.0));
    }
}
