//! Uniform occupancy grid over the unit square.
//!
//! Cells are `min_distance / sqrt(2)` wide, so two accepted samples can never share a
//! cell and each cell holds at most one point.
use glam::Vec2;

/// Cells scanned on each side of the query cell. The window is the half-open range
/// `cell - NEIGHBOURHOOD_CELLS .. cell + NEIGHBOURHOOD_CELLS`, one cell wider toward the
/// origin than away from it.
pub const NEIGHBOURHOOD_CELLS: isize = 5;

/// Spatial index with one optional point per cell.
#[derive(Debug, Clone)]
pub struct CellGrid {
    cell_size: f32,
    width: usize,
    height: usize,
    cells: Vec<Option<Vec2>>,
}

impl CellGrid {
    /// Builds a grid covering `[0, 1]^2` for the given minimum distance.
    pub fn new(min_distance: f32) -> Self {
        debug_assert!(min_distance > 0.0);
        let cell_size = min_distance / std::f32::consts::SQRT_2;
        let width = ((1.0 / cell_size).ceil() as usize).max(1);
        let height = width;

        Self {
            cell_size,
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid coordinates of a point, truncated toward zero. May fall outside the grid.
    #[inline]
    pub fn cell_of(&self, p: Vec2) -> (isize, isize) {
        (
            (p.x / self.cell_size) as isize,
            (p.y / self.cell_size) as isize,
        )
    }

    #[inline]
    fn index(&self, gx: isize, gy: isize) -> Option<usize> {
        if gx < 0 || gy < 0 || gx >= self.width as isize || gy >= self.height as isize {
            return None;
        }
        Some(gy as usize * self.width + gx as usize)
    }

    /// Point stored in a cell, if any.
    pub fn get(&self, gx: isize, gy: isize) -> Option<Vec2> {
        self.index(gx, gy).and_then(|idx| self.cells[idx])
    }

    /// Stores `p` in its cell, replacing any previous occupant.
    ///
    /// Points on the far edge of the unit square land in the last row/column.
    pub fn insert(&mut self, p: Vec2) {
        let (gx, gy) = self.cell_of(p);
        let gx = gx.clamp(0, self.width as isize - 1);
        let gy = gy.clamp(0, self.height as isize - 1);
        if let Some(idx) = self.index(gx, gy) {
            self.cells[idx] = Some(p);
        }
    }

    /// True if any stored point inside the scan window lies closer than `min_distance` to `p`.
    pub fn has_neighbour_within(&self, p: Vec2, min_distance: f32) -> bool {
        let (gx, gy) = self.cell_of(p);
        let min_distance_squared = min_distance * min_distance;

        for i in (gx - NEIGHBOURHOOD_CELLS)..(gx + NEIGHBOURHOOD_CELLS) {
            for j in (gy - NEIGHBOURHOOD_CELLS)..(gy + NEIGHBOURHOOD_CELLS) {
                if let Some(existing) = self.get(i, j) {
                    if existing.distance_squared(p) < min_distance_squared {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
