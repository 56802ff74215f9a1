//! Dart-throwing Poisson-disk sampler with an active list.
use std::f32::consts::TAU;

use glam::Vec2;
use rand::RngCore;
use tracing::debug;

use crate::error::{Error, InvalidParameter, Result};
use crate::region::Region;
use crate::sampling::grid::CellGrid;
use crate::sampling::{rand01, rand_index};
use crate::scatter::events::{EventSink, ScatterEvent};

/// Candidates drawn around each active point (Bridson's `k`).
pub const DEFAULT_CANDIDATES_PER_POINT: usize = 30;

/// Draws allowed while searching for a seed point inside the region.
pub const DEFAULT_MAX_SEED_ATTEMPTS: usize = 10_000;

/// Accepted-point interval between progress events.
pub const PROGRESS_INTERVAL: usize = 100;

/// Normalized parameters for one sampler run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerParams {
    /// Minimum spacing between samples in the unit square.
    pub min_distance: f32,
    /// Candidates drawn around each active point.
    pub candidates_per_point: usize,
    /// Upper bound on the number of accepted samples.
    pub target_count: usize,
    /// Drop the scatter radius from the region clearance.
    pub allow_disks_on_boundary: bool,
    /// Cap on random draws while looking for the seed point.
    pub max_seed_attempts: usize,
}

impl SamplerParams {
    pub fn new(min_distance: f32, target_count: usize) -> Self {
        Self {
            min_distance,
            candidates_per_point: DEFAULT_CANDIDATES_PER_POINT,
            target_count,
            allow_disks_on_boundary: false,
            max_seed_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
        }
    }

    pub fn with_candidates_per_point(mut self, candidates_per_point: usize) -> Self {
        self.candidates_per_point = candidates_per_point;
        self
    }

    pub fn with_disks_on_boundary(mut self, allow: bool) -> Self {
        self.allow_disks_on_boundary = allow;
        self
    }

    pub fn with_max_seed_attempts(mut self, max_seed_attempts: usize) -> Self {
        self.max_seed_attempts = max_seed_attempts;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(InvalidParameter::MinDistance(self.min_distance).into());
        }
        if self.candidates_per_point == 0 {
            return Err(InvalidParameter::CandidatesPerPoint.into());
        }
        if self.max_seed_attempts == 0 {
            return Err(InvalidParameter::MaxSeedAttempts.into());
        }
        Ok(())
    }
}

/// Accepted samples in the unit square plus run counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SamplerOutput {
    /// Samples in acceptance order.
    pub points: Vec<Vec2>,
    /// Candidates drawn around active points.
    pub candidates_evaluated: usize,
    /// Candidates rejected by the region or the spacing test.
    pub candidates_rejected: usize,
    /// True if the active list emptied before the target count was reached.
    pub exhausted: bool,
}

/// Grows a Poisson-disk point set from one seed inside a [`Region`].
pub struct PoissonDiskSampler {
    params: SamplerParams,
    region: Region,
    grid: CellGrid,
    active_list: Vec<Vec2>,
    points: Vec<Vec2>,
    candidates_evaluated: usize,
    candidates_rejected: usize,
}

impl PoissonDiskSampler {
    pub fn try_new(region: Region, params: SamplerParams) -> Result<Self> {
        params.validate()?;
        let region = if params.allow_disks_on_boundary {
            region.without_scatter_margin()
        } else {
            region
        };

        Ok(Self {
            params,
            region,
            grid: CellGrid::new(params.min_distance),
            active_list: Vec::new(),
            points: Vec::with_capacity(params.target_count),
            candidates_evaluated: 0,
            candidates_rejected: 0,
        })
    }

    /// Region the sampler tests candidates against.
    pub fn region(&self) -> &Region {
        &self.region
    }

    fn find_seed<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<(Vec2, usize)> {
        for attempt in 1..=self.params.max_seed_attempts {
            let candidate = Vec2::new(rand01(rng), rand01(rng));
            if self.region.contains(candidate) {
                return Ok((candidate, attempt));
            }
        }
        Err(Error::RegionTooSmall {
            attempts: self.params.max_seed_attempts,
        })
    }

    fn pop_random<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Option<Vec2> {
        if self.active_list.is_empty() {
            return None;
        }
        let idx = rand_index(rng, self.active_list.len());
        Some(self.active_list.swap_remove(idx))
    }

    fn candidate_around<R: RngCore + ?Sized>(&self, rng: &mut R, point: Vec2) -> Vec2 {
        // Radius is uniform in [d, 2d), not area-uniform.
        let r1 = rand01(rng);
        let r2 = rand01(rng);
        let radius = self.params.min_distance * (r1 + 1.0);
        let angle = TAU * r2;
        point + Vec2::new(angle.cos(), angle.sin()) * radius
    }

    fn is_acceptable(&self, candidate: Vec2) -> bool {
        self.region.contains(candidate)
            && !self
                .grid
                .has_neighbour_within(candidate, self.params.min_distance)
    }

    fn accept(&mut self, point: Vec2, sink: &mut dyn EventSink) {
        self.active_list.push(point);
        self.points.push(point);
        self.grid.insert(point);

        let accepted = self.points.len();
        if accepted % PROGRESS_INTERVAL == 0 {
            debug!("Accepted {} of {} points.", accepted, self.params.target_count);
            sink.send(ScatterEvent::Progress { accepted });
        }
    }

    pub fn generate<R: RngCore + ?Sized>(self, rng: &mut R) -> Result<SamplerOutput> {
        self.generate_with_events(rng, &mut ())
    }

    /// Runs the sampler to completion, reporting the seed and progress to `sink`.
    pub fn generate_with_events<R: RngCore + ?Sized>(
        mut self,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<SamplerOutput> {
        let target = self.params.target_count;
        if target == 0 {
            return Ok(SamplerOutput::default());
        }

        let (seed, attempts) = self.find_seed(rng)?;
        sink.send(ScatterEvent::SeedPlaced {
            position: seed,
            attempts,
        });
        self.accept(seed, sink);

        let mut exhausted = false;
        'outer: while self.points.len() < target {
            let Some(active) = self.pop_random(rng) else {
                exhausted = true;
                break;
            };

            for _ in 0..self.params.candidates_per_point {
                let candidate = self.candidate_around(rng, active);
                self.candidates_evaluated += 1;

                if self.is_acceptable(candidate) {
                    self.accept(candidate, sink);
                    if self.points.len() >= target {
                        break 'outer;
                    }
                } else {
                    self.candidates_rejected += 1;
                }
            }
        }

        Ok(SamplerOutput {
            points: self.points,
            candidates_evaluated: self.candidates_evaluated,
            candidates_rejected: self.candidates_rejected,
            exhausted,
        })
    }
}
