use poisson_scatter::prelude::*;
use poisson_scatter_examples::{init_tracing, render_scatter_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = DiskScatter::new(350.0, 10.0, 0.35);
    let mut progress = FnSink::new(|event| {
        if let ScatterEvent::Progress { accepted } = event {
            info!("... {accepted} points");
        }
    });
    let result = config.run_with_events(1, &mut progress)?;

    info!(
        "{} of {} points, achieved fill fraction {:.3} (requested {}).",
        result.len(),
        result.target_count,
        config.achieved_fill_fraction(result.len()),
        config.fill_fraction,
    );

    render_scatter_to_png(
        &result.points,
        config.region().shape,
        config.scatter_radius,
        &RenderConfig::new((800, 800)),
        "circular-basic.png",
    )
}
