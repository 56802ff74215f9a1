//! Region shapes and the containment predicates used while sampling.
//!
//! Sampling happens in the unit square `[0, 1]^2`. A [`Region`] knows how to test a
//! normalized point against its shape (shrunk by the scatter radius and border margin so
//! that a disk of `scatter_radius` centered on an accepted point stays inside), and how to
//! map normalized points into world coordinates centered on the region's center.
use glam::Vec2;

/// Outline of the scatter area in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Disk of the given radius.
    Disk { radius: f32 },
    /// Axis-aligned rectangle of the given width and height.
    Rectangle { width: f32, height: f32 },
}

/// Shape plus the clearances applied for one generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Outline in world units.
    pub shape: Shape,
    /// Radius of the object placed at each sample.
    pub scatter_radius: f32,
    /// Extra clearance kept between objects and the outline.
    pub border_margin: f32,
}

impl Region {
    pub fn new(shape: Shape, scatter_radius: f32, border_margin: f32) -> Self {
        Self {
            shape,
            scatter_radius,
            border_margin,
        }
    }

    /// World-space distance kept between a sample and the outline.
    #[inline]
    pub fn clearance(&self) -> f32 {
        self.scatter_radius + self.border_margin
    }

    /// Same region with the scatter radius dropped from the clearance, so objects may
    /// overlap the outline. The border margin still applies.
    pub fn without_scatter_margin(self) -> Self {
        Self {
            scatter_radius: 0.0,
            ..self
        }
    }

    /// Tests a normalized point against the shrunken shape.
    pub fn contains(&self, p: Vec2) -> bool {
        match self.shape {
            Shape::Disk { radius } => {
                let centered = (p - Vec2::splat(0.5)) * 2.0;
                centered.length() < 1.0 - self.clearance() / radius
            }
            Shape::Rectangle { width, height } => {
                let min_x = self.clearance() / width;
                let min_y = self.clearance() / height;
                p.x >= min_x && p.y >= min_y && p.x <= 1.0 - min_x && p.y <= 1.0 - min_y
            }
        }
    }

    /// World extent covered by the unit square after rescaling.
    ///
    /// The border margin is taken off once from the full diameter or edge length.
    pub fn world_scale(&self) -> Vec2 {
        match self.shape {
            Shape::Disk { radius } => Vec2::splat(2.0 * (radius - self.border_margin)),
            Shape::Rectangle { width, height } => {
                Vec2::new(width - self.border_margin, height - self.border_margin)
            }
        }
    }

    /// Maps a normalized point to world coordinates centered on the region.
    #[inline]
    pub fn to_world(&self, p: Vec2) -> Vec2 {
        let scale = self.world_scale();
        p * scale - scale * 0.5
    }
}
