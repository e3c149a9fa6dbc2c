//! Flat scalar grid shared by the value and boost fields.

/// Row-major grid of `f64` samples with one more column and row of samples
/// than the cell counts it bounds, so every cell sees four corners.
///
/// The backing buffer is reused across frames and only reallocated when
/// the surface resizes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    cols: usize,
    rows: usize,
    data: Vec<f64>,
}

impl ScalarGrid {
    /// Create a zeroed grid bounding `cols x rows` cells.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            data: vec![0.0; (cols + 1) * (rows + 1)],
        }
    }

    /// Build a grid directly from row-major samples. `samples` must hold
    /// `(cols + 1) * (rows + 1)` values.
    pub fn from_samples(cols: usize, rows: usize, samples: Vec<f64>) -> Self {
        assert_eq!(samples.len(), (cols + 1) * (rows + 1));
        Self {
            cols,
            rows,
            data: samples,
        }
    }

    /// Cell count along x.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell count along y.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Samples per row.
    fn stride(&self) -> usize {
        self.cols + 1
    }

    /// Sample at column `x`, row `y`, both in `0..=cols` / `0..=rows`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.stride() + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        let stride = self.stride();
        self.data[y * stride + x] = value;
    }

    /// True when `(x, y)` addresses a sample inside the grid.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x <= self.cols as i64 && y <= self.rows as i64
    }

    /// Rebound the grid to `cols x rows` cells, zeroing every sample.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.data.clear();
        self.data.resize((cols + 1) * (rows + 1), 0.0);
    }

    /// Raw samples, row-major.
    pub fn samples(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_overshoot_cells_by_one() {
        let grid = ScalarGrid::new(4, 3);
        assert_eq!(grid.samples().len(), 5 * 4);
        assert!(grid.contains(4, 3));
        assert!(!grid.contains(5, 3));
        assert!(!grid.contains(-1, 0));
    }

    #[test]
    fn set_get_round_trips_row_major() {
        let mut grid = ScalarGrid::new(3, 2);
        grid.set(2, 1, 7.5);
        assert_eq!(grid.get(2, 1), 7.5);
        // Row 1 at stride 4.
        assert_eq!(grid.samples()[6], 7.5);
    }

    #[test]
    fn resize_zeroes_retained_samples() {
        let mut grid = ScalarGrid::new(2, 2);
        grid.set(1, 1, 9.0);
        grid.resize(3, 1);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.rows(), 1);
        assert!(grid.samples().iter().all(|&v| v == 0.0));
    }
}
