//! Tunables for the contour field effect.

/// Knobs controlling the look and motion of the contour field.
///
/// The defaults reproduce the dark landing-page look the effect ships
/// with: 8 px cells, contour lines every 3 units with every third line
/// emphasized, and a slow noise drift nudged along by the pointer.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Cell size in surface pixels. Smaller cells mean a denser grid and
    /// smoother contours at higher per-frame cost.
    pub cell_size: f64,
    /// Spacing between adjacent contour thresholds.
    pub threshold_step: f64,
    /// Every `thick_every`-th threshold, anchored at zero, is stroked with
    /// the emphasized style.
    pub thick_every: u32,
    /// Advance of the noise time coordinate per frame.
    pub z_step: f64,
    /// Spatial frequency applied to grid coordinates before sampling.
    pub noise_scale: f64,
    /// Pointer influence radius, in grid cells.
    pub pointer_radius: i32,
    /// Boost added at the center of the pointer cone each frame.
    pub pointer_increment: f64,
    /// Multiplicative decay applied to positive boost cells each frame.
    pub boost_decay: f64,
    /// Stroke color of the emphasized contour lines.
    pub thick_color: String,
    /// Stroke color of the regular contour lines.
    pub thin_color: String,
    /// Width of the emphasized lines, in surface pixels.
    pub thick_width: f64,
    /// Width of the regular lines, in surface pixels.
    pub thin_width: f64,
    /// Line cap applied to every stroke pass.
    pub line_cap: String,
    /// Line join applied to every stroke pass.
    pub line_join: String,
    /// Noise permutation seed. `None` means the embedding layer draws one
    /// at attach time, giving each page load a different field.
    pub seed: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: 8.0,
            threshold_step: 3.0,
            thick_every: 3,
            z_step: 0.0005,
            noise_scale: 0.02,
            pointer_radius: 5,
            pointer_increment: 0.0025,
            boost_decay: 0.99,
            thick_color: "#515255".to_owned(),
            thin_color: "#2B2C2D".to_owned(),
            thick_width: 2.0,
            thin_width: 1.0,
            line_cap: "butt".to_owned(),
            line_join: "miter".to_owned(),
            seed: None,
        }
    }
}

impl Settings {
    /// Threshold period of the emphasized style.
    pub fn thick_period(&self) -> f64 {
        self.threshold_step * f64::from(self.thick_every)
    }
}
