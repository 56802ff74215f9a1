//! Sweeps the requested fill fraction and reports achieved density and spacing.
use poisson_scatter::prelude::*;
use poisson_scatter_examples::init_tracing;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let disk_radius = 7.5;
    let scatter_radius = 0.05;

    for fill_fraction in [0.05, 0.10, 0.15, 0.20, 0.25, 0.30, 0.35] {
        let config = DiskScatter::new(disk_radius, scatter_radius, fill_fraction);
        let result = config.run(1)?;

        let mut min_dist = f32::MAX;
        let mut max_dist = 0.0f32;
        for (i, a) in result.points.iter().enumerate() {
            for b in &result.points[i + 1..] {
                let d = a.distance(*b);
                min_dist = min_dist.min(d);
                max_dist = max_dist.max(d);
            }
        }

        info!(
            "ff {:.2} -> {:.3} | points {} | min dist {:.4} (net {:.4}) | max dist {:.3}",
            fill_fraction,
            config.achieved_fill_fraction(result.len()),
            result.len(),
            min_dist,
            min_dist - 2.0 * scatter_radius,
            max_dist,
        );
        if min_dist <= 2.0 * scatter_radius {
            warn!("Scattered disks overlap at fill fraction {fill_fraction}.");
        }
    }

    Ok(())
}
