//! Contour extraction over whole grids.

mod common;

use common::Recorder;
use topo_wasm::contour::trace_threshold;
use topo_wasm::grid::ScalarGrid;

fn peak_grid(size: usize, peak_x: usize, peak_y: usize) -> ScalarGrid {
    let mut grid = ScalarGrid::new(size, size);
    grid.set(peak_x, peak_y, 10.0);
    grid
}

#[test]
fn isolated_peak_draws_a_closed_diamond() {
    // 2x2 cells, one raised sample at the shared center corner. All four
    // cells cut once, closing into a diamond around the peak.
    let grid = peak_grid(2, 1, 1);
    let mut recorder = Recorder::default();
    trace_threshold(&grid, 5.0, 8.0, &mut recorder);
    let segments = recorder.segments();
    assert_eq!(segments.len(), 4);

    let endpoints: Vec<(f64, f64)> = segments.iter().flat_map(|&(s, e)| [s, e]).collect();
    assert_eq!(endpoints.len(), 8);
    // Every diamond vertex is shared by exactly two segments.
    for vertex in [(8.0, 4.0), (4.0, 8.0), (12.0, 8.0), (8.0, 12.0)] {
        assert_eq!(
            endpoints.iter().filter(|&&p| p == vertex).count(),
            2,
            "vertex {vertex:?} should join two segments"
        );
    }
}

#[test]
fn distant_cells_emit_nothing() {
    let grid = peak_grid(6, 3, 3);
    let mut recorder = Recorder::default();
    trace_threshold(&grid, 5.0, 8.0, &mut recorder);
    let segments = recorder.segments();
    // Only the four cells touching the peak emit, so every coordinate
    // stays within their bounds.
    assert_eq!(segments.len(), 4);
    for &((x0, y0), (x1, y1)) in &segments {
        for v in [x0, y0, x1, y1] {
            assert!((16.0..=32.0).contains(&v), "coordinate {v} out of bounds");
        }
    }
}

#[test]
fn flat_grids_draw_nothing() {
    let grid = ScalarGrid::new(4, 4);
    let mut recorder = Recorder::default();
    trace_threshold(&grid, 5.0, 8.0, &mut recorder);
    assert!(recorder.segments().is_empty());
    // Exactly on the threshold counts as above, which is still uniform.
    trace_threshold(&grid, 0.0, 8.0, &mut recorder);
    assert!(recorder.segments().is_empty());
}

#[test]
fn threshold_at_the_peak_value_draws_nothing() {
    let grid = peak_grid(2, 1, 1);
    let mut recorder = Recorder::default();
    trace_threshold(&grid, 10.0, 8.0, &mut recorder);
    assert!(recorder.segments().is_empty());
}
