//! Marching-squares contour extraction.
//!
//! Each grid cell is classified by comparing its four corner samples
//! against a threshold, packing the outcomes into a 4-bit case index.
//! The index selects which cell edges the contour crosses; crossing
//! positions are found by linear interpolation between the corner values.

use crate::grid::ScalarGrid;
use crate::simulation::Surface;

/// Cell edges a contour segment can cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    North,
    East,
    South,
    West,
}

use Edge::{East, North, South, West};

/// Segment endpoints per case index, packed as `nw<<3 | ne<<2 | se<<1 | sw`.
///
/// Complementary cases share a pattern, so geometry does not depend on
/// which side of the threshold counts as inside. The saddle cases 5 and
/// 10 emit two segments with a fixed pairing, keeping connectivity stable
/// from frame to frame.
const CASE_SEGMENTS: [&[(Edge, Edge)]; 16] = [
    &[],                             // 0000
    &[(West, South)],                // 0001
    &[(East, South)],                // 0010
    &[(West, East)],                 // 0011
    &[(North, East)],                // 0100
    &[(West, North), (South, East)], // 0101 saddle
    &[(South, North)],               // 0110
    &[(West, North)],                // 0111
    &[(West, North)],                // 1000
    &[(South, North)],               // 1001
    &[(North, East), (South, West)], // 1010 saddle
    &[(North, East)],                // 1011
    &[(West, East)],                 // 1100
    &[(East, South)],                // 1101
    &[(West, South)],                // 1110
    &[],                             // 1111
];

/// Fraction of the way from `v0` to `v1` at which `threshold` crosses.
/// Equal corner values collapse the crossing to the start of the edge
/// rather than dividing by zero.
#[inline]
fn crossing(threshold: f64, v0: f64, v1: f64) -> f64 {
    if v0 == v1 {
        0.0
    } else {
        (threshold - v0) / (v1 - v0)
    }
}

/// One cell's corner samples and its placement on the surface.
struct Cell {
    left: f64,
    top: f64,
    size: f64,
    nw: f64,
    ne: f64,
    se: f64,
    sw: f64,
}

impl Cell {
    /// Point where the contour crosses `edge`, in surface coordinates.
    fn edge_point(&self, edge: Edge, threshold: f64) -> (f64, f64) {
        match edge {
            North => (
                self.left + self.size * crossing(threshold, self.nw, self.ne),
                self.top,
            ),
            East => (
                self.left + self.size,
                self.top + self.size * crossing(threshold, self.ne, self.se),
            ),
            South => (
                self.left + self.size * crossing(threshold, self.sw, self.se),
                self.top + self.size,
            ),
            West => (
                self.left,
                self.top + self.size * crossing(threshold, self.nw, self.sw),
            ),
        }
    }
}

/// Emit the contour segments crossing the cell at `(x, y)` into `sink`.
///
/// Cells entirely on one side of the threshold emit nothing; corners
/// exactly on the threshold count as above for the purpose of skipping,
/// which drops the zero-length segments a strict comparison would keep.
pub fn trace_cell<S: Surface>(
    values: &ScalarGrid,
    x: usize,
    y: usize,
    threshold: f64,
    cell_size: f64,
    sink: &mut S,
) {
    let cell = Cell {
        left: x as f64 * cell_size,
        top: y as f64 * cell_size,
        size: cell_size,
        nw: values.get(x, y),
        ne: values.get(x + 1, y),
        se: values.get(x + 1, y + 1),
        sw: values.get(x, y + 1),
    };

    let all_above =
        cell.nw >= threshold && cell.ne >= threshold && cell.se >= threshold && cell.sw >= threshold;
    let all_below =
        cell.nw < threshold && cell.ne < threshold && cell.se < threshold && cell.sw < threshold;
    if all_above || all_below {
        return;
    }

    let index = usize::from(cell.nw > threshold) << 3
        | usize::from(cell.ne > threshold) << 2
        | usize::from(cell.se > threshold) << 1
        | usize::from(cell.sw > threshold);

    for &(from, to) in CASE_SEGMENTS[index] {
        let (x0, y0) = cell.edge_point(from, threshold);
        let (x1, y1) = cell.edge_point(to, threshold);
        sink.move_to(x0, y0);
        sink.line_to(x1, y1);
    }
}

/// Run the extractor over every cell for one threshold, appending all
/// crossing segments to the path open on `sink`.
pub fn trace_threshold<S: Surface>(
    values: &ScalarGrid,
    threshold: f64,
    cell_size: f64,
    sink: &mut S,
) {
    for y in 0..values.rows() {
        for x in 0..values.cols() {
            trace_cell(values, x, y, threshold, cell_size, sink);
        }
    }
}
