//! Preview rendering and logging setup shared by the example binaries.
use std::path::Path;

use anyhow::Context;
use glam::Vec2;
use image::{Rgb, RgbImage};
use poisson_scatter::region::Shape;

/// Installs a `tracing` subscriber printing `info` and above. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .try_init();
}

/// Colors and size of a preview image.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output size in pixels (width, height).
    pub image_size: (u32, u32),
    /// Color outside the region.
    pub background: [u8; 3],
    /// Color inside the region.
    pub region_fill: [u8; 3],
    /// Color of the scattered disks.
    pub disk_color: [u8; 3],
    /// Padding around the region as a fraction of its extent.
    pub padding: f32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            background: [255, 255, 255],
            region_fill: [200, 215, 235],
            disk_color: [200, 60, 60],
            padding: 0.05,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_disk_color(mut self, disk_color: [u8; 3]) -> Self {
        self.disk_color = disk_color;
        self
    }
}

fn shape_extent(shape: Shape) -> Vec2 {
    match shape {
        Shape::Disk { radius } => Vec2::splat(2.0 * radius),
        Shape::Rectangle { width, height } => Vec2::new(width, height),
    }
}

fn inside_shape(shape: Shape, p: Vec2) -> bool {
    match shape {
        Shape::Disk { radius } => p.length() <= radius,
        Shape::Rectangle { width, height } => {
            p.x.abs() <= width * 0.5 && p.y.abs() <= height * 0.5
        }
    }
}

/// Draws the region and a filled disk of `scatter_radius` around each point.
pub fn render_scatter_to_png(
    points: &[Vec2],
    shape: Shape,
    scatter_radius: f32,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    anyhow::ensure!(w > 0 && h > 0, "image size must be non-zero");

    let view = shape_extent(shape) * (1.0 + 2.0 * config.padding);
    let view_min = -view * 0.5;
    let pixel = Vec2::new(view.x / w as f32, view.y / h as f32);

    // Rows count from the bottom in world space and from the top in the image.
    let to_world = |px: u32, row: u32| {
        Vec2::new(
            view_min.x + (px as f32 + 0.5) * pixel.x,
            view_min.y + (row as f32 + 0.5) * pixel.y,
        )
    };

    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    for row in 0..h {
        for px in 0..w {
            if inside_shape(shape, to_world(px, row)) {
                img.put_pixel(px, h - 1 - row, Rgb(config.region_fill));
            }
        }
    }

    let r2 = scatter_radius * scatter_radius;
    for p in points {
        let lo = ((*p - Vec2::splat(scatter_radius) - view_min) / pixel).floor().max(Vec2::ZERO);
        let hi = ((*p + Vec2::splat(scatter_radius) - view_min) / pixel).ceil().max(Vec2::ZERO);

        for row in (lo.y as u32)..=(hi.y as u32).min(h - 1) {
            for px in (lo.x as u32)..=(hi.x as u32).min(w - 1) {
                if to_world(px, row).distance_squared(*p) <= r2 {
                    img.put_pixel(px, h - 1 - row, Rgb(config.disk_color));
                }
            }
        }
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("Wrote {}.", path.display());
    Ok(())
}
