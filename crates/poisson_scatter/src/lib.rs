#![forbid(unsafe_code)]
//! poisson_scatter: Poisson-disk scattering of non-overlapping disks inside a disk or rectangle.
//!
//! Modules:
//! - region: outline shapes, containment predicates, world-space mapping
//! - sampling: occupancy grid and the dart-throwing sampler on the unit square
//! - scatter: drivers deriving density parameters, events, results
//!
//! Quick start:
//!
//! ```no_run
//! use poisson_scatter::prelude::*;
//!
//! let result = DiskScatter::new(350.0, 10.0, 0.35).run(1)?;
//! println!("{} points, {} requested", result.len(), result.target_count);
//! # Ok::<(), poisson_scatter::error::Error>(())
//! ```
pub mod error;
pub mod region;
pub mod sampling;
pub mod scatter;

pub use scatter::{generate_circular, generate_rectangular};

/// Convenient re-exports for common types. Import with `use poisson_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, InvalidParameter, Result};
    pub use crate::region::{Region, Shape};
    pub use crate::sampling::{CellGrid, PoissonDiskSampler, SamplerOutput, SamplerParams};
    pub use crate::scatter::events::{EventSink, FnSink, ScatterEvent, VecSink};
    pub use crate::scatter::{
        generate_circular, generate_rectangular, DiskScatter, RectScatter, ScatterResult,
    };
}
