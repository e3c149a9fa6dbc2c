//! Noise field generation and pointer-driven boost accumulation.

use noise::{NoiseFn, Perlin};

use crate::grid::ScalarGrid;

/// Scale factor from raw noise output to threshold space.
const AMPLITUDE: f64 = 100.0;

/// Scalar field driving the contour passes: a value grid resampled from
/// 3D Perlin noise every frame, plus a persistent boost grid that locally
/// advances the noise time coordinate near the pointer.
pub struct NoiseField {
    perlin: Perlin,
    values: ScalarGrid,
    boost: ScalarGrid,
    z_offset: f64,
    min: f64,
    max: f64,
}

impl NoiseField {
    pub fn new(seed: u32, cols: usize, rows: usize) -> Self {
        Self {
            perlin: Perlin::new(seed),
            values: ScalarGrid::new(cols, rows),
            boost: ScalarGrid::new(cols, rows),
            z_offset: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn values(&self) -> &ScalarGrid {
        &self.values
    }

    pub fn boost(&self) -> &ScalarGrid {
        &self.boost
    }

    /// Current noise time coordinate.
    pub fn z_offset(&self) -> f64 {
        self.z_offset
    }

    /// Sample bounds of the latest [`NoiseField::regenerate`] pass, or
    /// `None` before the first pass or right after a resize.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        (self.min <= self.max).then_some((self.min, self.max))
    }

    /// Advance the noise time coordinate by one frame step.
    pub fn advance(&mut self, z_step: f64) {
        self.z_offset += z_step;
    }

    /// Resample every grid value from `perlin(x * scale, y * scale,
    /// z + boost)`, scaled into threshold space.
    ///
    /// The same pass refreshes the min/max trackers and decays positive
    /// boost cells; each cell is read for this frame's value before its
    /// boost shrinks.
    pub fn regenerate(&mut self, noise_scale: f64, boost_decay: f64) {
        self.min = f64::INFINITY;
        self.max = f64::NEG_INFINITY;
        for y in 0..=self.values.rows() {
            for x in 0..=self.values.cols() {
                let boost = self.boost.get(x, y);
                let value = self.perlin.get([
                    x as f64 * noise_scale,
                    y as f64 * noise_scale,
                    self.z_offset + boost,
                ]) * AMPLITUDE;
                self.values.set(x, y, value);
                self.min = self.min.min(value);
                self.max = self.max.max(value);
                if boost > 0.0 {
                    self.boost.set(x, y, boost * boost_decay);
                }
            }
        }
    }

    /// Pour boost into the samples around the pointer cell: a radial cone
    /// peaking at `increment` in the center and falling to zero at
    /// `radius` cells out.
    ///
    /// A center outside the grid (no pointer movement yet, or the surface
    /// shrank under the pointer) leaves the grid untouched.
    pub fn apply_pointer_boost(&mut self, cell_x: i64, cell_y: i64, radius: i32, increment: f64) {
        if radius <= 0 || !self.boost.contains(cell_x, cell_y) {
            return;
        }
        let radius_sq = f64::from(radius * radius);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let dist_sq = f64::from(dx * dx + dy * dy);
                if dist_sq > radius_sq {
                    continue;
                }
                let x = cell_x + i64::from(dx);
                let y = cell_y + i64::from(dy);
                if self.boost.contains(x, y) {
                    let falloff = 1.0 - dist_sq / radius_sq;
                    let current = self.boost.get(x as usize, y as usize);
                    self.boost
                        .set(x as usize, y as usize, current + increment * falloff);
                }
            }
        }
    }

    /// Rebound both grids to the new cell counts. Accumulated boost and
    /// the tracked value range are dropped.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.values.resize(cols, rows);
        self.boost.resize(cols, rows);
        self.min = f64::INFINITY;
        self.max = f64::NEG_INFINITY;
    }
}
