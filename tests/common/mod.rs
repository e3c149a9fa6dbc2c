#![allow(dead_code)]
//! Recording surface for driving the frame pipeline off-browser.

use topo_wasm::simulation::Surface;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear,
    BeginPath,
    SetStroke { color: String, width: f64 },
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
}

/// [`Surface`] that records every call for later inspection.
#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    /// Recorded polyline segments as (start, end) point pairs.
    pub fn segments(&self) -> Vec<((f64, f64), (f64, f64))> {
        let mut out = Vec::new();
        let mut last_move = None;
        for op in &self.ops {
            match *op {
                Op::MoveTo(x, y) => last_move = Some((x, y)),
                Op::LineTo(x, y) => {
                    if let Some(start) = last_move.take() {
                        out.push((start, (x, y)));
                    }
                }
                _ => {}
            }
        }
        out
    }

    /// Stroke styles in the order the threshold passes ran.
    pub fn stroke_styles(&self) -> Vec<(String, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::SetStroke { color, width } => Some((color.clone(), *width)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn set_stroke(&mut self, color: &str, width: f64) {
        self.ops.push(Op::SetStroke {
            color: color.to_owned(),
            width,
        });
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
}
