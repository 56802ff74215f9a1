use poisson_scatter::prelude::*;
use poisson_scatter_examples::{init_tracing, render_scatter_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RectScatter::new(700.0, 400.0, 10.0, 0.45).with_border_margin(5.0);
    let result = config.run(1)?;

    info!(
        "{} of {} points, achieved fill fraction {:.3} (requested {}), exhausted: {}.",
        result.len(),
        result.target_count,
        config.achieved_fill_fraction(result.len()),
        config.fill_fraction,
        result.exhausted,
    );

    render_scatter_to_png(
        &result.points,
        config.region().shape,
        config.scatter_radius,
        &RenderConfig::new((875, 500)).with_disk_color([40, 120, 60]),
        "rectangular-basic.png",
    )
}
