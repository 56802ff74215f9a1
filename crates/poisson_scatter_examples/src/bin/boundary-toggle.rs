//! Compares scattering with and without disks allowed to cross the outer edge.
use poisson_scatter::prelude::*;
use poisson_scatter_examples::{init_tracing, render_scatter_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let disk_radius = 350.0;
    let scatter_radius = 10.0;

    for allow in [false, true] {
        let config = DiskScatter::new(disk_radius, scatter_radius, 0.4).with_disks_on_boundary(allow);
        let result = config.run(0)?;

        let on_boundary = result
            .points
            .iter()
            .filter(|p| p.length() > disk_radius - scatter_radius)
            .count();
        info!(
            "allow_disks_on_boundary={allow}: {} points, {on_boundary} crossing the edge.",
            result.len(),
        );

        render_scatter_to_png(
            &result.points,
            config.region().shape,
            scatter_radius,
            &RenderConfig::new((800, 800)).with_background([240, 240, 240]),
            format!("boundary-toggle-{allow}.png"),
        )?;
    }

    Ok(())
}
