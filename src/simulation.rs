//! Per-frame orchestration: owned animation state and the drawing seam.

use crate::config::Settings;
use crate::contour;
use crate::field::NoiseField;

/// Immediate-mode drawing surface the frame loop strokes into.
///
/// Shaped after the 2D canvas API: open a path, append polyline
/// segments, then stroke the whole path with one style. Host-side
/// tests drive frames through a recording implementation.
pub trait Surface {
    /// Wipe the whole surface.
    fn clear(&mut self);
    /// Open a fresh path for the next threshold pass.
    fn begin_path(&mut self);
    /// Style applied when the open path is stroked.
    fn set_stroke(&mut self, color: &str, width: f64);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Stroke the open path.
    fn stroke(&mut self);
}

/// Complete animation state for the effect.
///
/// Owned by whatever drives the frame loop; every per-frame step borrows
/// it exclusively, so nothing here needs interior mutability or locks.
pub struct Simulation {
    settings: Settings,
    field: NoiseField,
    pointer: Option<(f64, f64)>,
    pointer_active: bool,
}

impl Simulation {
    /// Build the state for a surface of `width x height` pixels.
    pub fn new(settings: Settings, width: f64, height: f64) -> Self {
        let (cols, rows) = grid_dims(width, height, settings.cell_size);
        let seed = settings.seed.unwrap_or(0);
        Self {
            field: NoiseField::new(seed, cols, rows),
            settings,
            pointer: None,
            pointer_active: true,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn field(&self) -> &NoiseField {
        &self.field
    }

    /// Record the latest pointer position, in surface coordinates.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    /// Gate for pointer influence. Starts enabled; wiring it to a real
    /// pressed state is up to the embedder.
    pub fn set_pointer_active(&mut self, active: bool) {
        self.pointer_active = active;
    }

    /// Rebuild the grids for a resized surface. Accumulated boost drops;
    /// the pointer position carries over.
    pub fn resize(&mut self, width: f64, height: f64) {
        let (cols, rows) = grid_dims(width, height, self.settings.cell_size);
        self.field.resize(cols, rows);
    }

    /// One animation tick. Applies pointer boost and advances the noise
    /// time, then regenerates the field and strokes every threshold the
    /// new value range crosses.
    pub fn advance(&mut self, surface: &mut impl Surface) {
        if self.pointer_active {
            if let Some((px, py)) = self.pointer {
                let cell_x = (px / self.settings.cell_size).floor() as i64;
                let cell_y = (py / self.settings.cell_size).floor() as i64;
                self.field.apply_pointer_boost(
                    cell_x,
                    cell_y,
                    self.settings.pointer_radius,
                    self.settings.pointer_increment,
                );
            }
        }

        surface.clear();
        self.field.advance(self.settings.z_step);
        self.field
            .regenerate(self.settings.noise_scale, self.settings.boost_decay);

        let Some((min, max)) = self.field.value_range() else {
            return;
        };
        let step = self.settings.threshold_step;
        if !(step > 0.0) {
            return;
        }
        // Sweep threshold multiples from just below the minimum up to, but
        // not including, the multiple at or above the maximum.
        let mut threshold = (min / step).floor() * step;
        let stop = (max / step).ceil() * step;
        while threshold < stop {
            self.stroke_threshold(threshold, surface);
            threshold += step;
        }
    }

    fn stroke_threshold(&self, threshold: f64, surface: &mut impl Surface) {
        surface.begin_path();
        // The emphasized style keys off absolute threshold values, not
        // the sweep index; it survives the range drifting across frames.
        if threshold % self.settings.thick_period() == 0.0 {
            surface.set_stroke(&self.settings.thick_color, self.settings.thick_width);
        } else {
            surface.set_stroke(&self.settings.thin_color, self.settings.thin_width);
        }
        contour::trace_threshold(
            self.field.values(),
            threshold,
            self.settings.cell_size,
            surface,
        );
        surface.stroke();
    }
}

/// Cell counts covering a surface: one cell per `cell_size` pixels, plus
/// one so the grid always overshoots the far edges.
pub fn grid_dims(width: f64, height: f64, cell_size: f64) -> (usize, usize) {
    if !(cell_size > 0.0) {
        return (1, 1);
    }
    let cols = (width / cell_size).max(0.0).floor() as usize + 1;
    let rows = (height / cell_size).max(0.0).floor() as usize + 1;
    (cols, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dims_overshoot_the_surface() {
        assert_eq!(grid_dims(640.0, 480.0, 8.0), (81, 61));
        assert_eq!(grid_dims(0.0, 0.0, 8.0), (1, 1));
        // Partial cells round down before the overshoot sample is added.
        assert_eq!(grid_dims(637.0, 479.0, 8.0), (80, 60));
    }

    #[test]
    fn thick_lines_anchor_to_absolute_thresholds() {
        let settings = Settings::default();
        let period = settings.thick_period();
        assert_eq!(period, 9.0);
        assert_eq!(18.0_f64 % period, 0.0);
        assert_eq!(-18.0_f64 % period, 0.0);
        assert_ne!(-15.0_f64 % period, 0.0);
    }
}
