//! Canvas glue: surface sizing, event listeners, and the frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::config::Settings;
use crate::simulation::{Simulation, Surface};

/// [`Surface`] over the 2D canvas context.
///
/// The context is pre-scaled by the device pixel ratio, so stroke
/// coordinates stay in CSS pixels while `clear` covers the whole
/// backing store.
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
    line_cap: String,
    line_join: String,
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn set_stroke(&mut self, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.set_line_cap(&self.line_cap);
        self.ctx.set_line_join(&self.line_join);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}

/// Size the backing store to the parent box times the device pixel ratio
/// and re-apply the context scale; assigning width or height resets the
/// transform. Returns the new backing-store dimensions.
fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) -> (f64, f64) {
    let dpr = window().map_or(1.0, |w| w.device_pixel_ratio());
    let rect = canvas.parent_element().map_or_else(
        || canvas.get_bounding_client_rect(),
        |parent| parent.get_bounding_client_rect(),
    );
    let width = rect.width();
    let height = rect.height();
    canvas.set_width((width * dpr) as u32);
    canvas.set_height((height * dpr) as u32);
    let _ = ctx.scale(dpr, dpr);
    // Pin the CSS size so the scaled backing store does not grow the element.
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{width}px"));
    let _ = style.set_property("height", &format!("{height}px"));
    (f64::from(canvas.width()), f64::from(canvas.height()))
}

// The animation-frame closure re-schedules itself, so it lives behind an
// `Rc<RefCell<Option<..>>>` that both the loop and the handle can reach.
type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(frame: &FrameClosure) -> Option<i32> {
    let frame = frame.borrow();
    let closure = frame.as_ref()?;
    window()?
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

/// Running contour effect bound to one canvas.
///
/// Holds the listeners and the pending animation frame. [`ContourField::stop`]
/// or dropping the handle tears everything down; [`ContourField::forget`]
/// leaks it for page-lifetime installs.
#[wasm_bindgen]
pub struct ContourField {
    canvas: HtmlCanvasElement,
    running: Rc<Cell<bool>>,
    frame_id: Rc<Cell<i32>>,
    frame: FrameClosure,
    on_pointer: Closure<dyn FnMut(MouseEvent)>,
    on_resize: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
impl ContourField {
    /// Start the effect on `canvas` with default settings and a seed
    /// drawn for this page load.
    pub fn attach(canvas: HtmlCanvasElement) -> Result<ContourField, JsValue> {
        Self::attach_with_seed(canvas, None)
    }

    /// Start with a fixed noise seed, giving a reproducible field.
    pub fn attach_with_seed(
        canvas: HtmlCanvasElement,
        seed: Option<u32>,
    ) -> Result<ContourField, JsValue> {
        let settings = Settings {
            seed: seed.or_else(|| Some((js_sys::Math::random() * f64::from(u32::MAX)) as u32)),
            ..Settings::default()
        };
        Self::start(canvas, settings)
    }

    fn start(canvas: HtmlCanvasElement, settings: Settings) -> Result<ContourField, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("2d canvas context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let (width, height) = fit_canvas(&canvas, &ctx);
        let mut surface = CanvasSurface {
            ctx: ctx.clone(),
            canvas: canvas.clone(),
            line_cap: settings.line_cap.clone(),
            line_join: settings.line_join.clone(),
        };
        let sim = Rc::new(RefCell::new(Simulation::new(settings, width, height)));
        log::info!("contour field attached: {width}x{height} device px");

        // Track the pointer in surface coordinates.
        let on_pointer = {
            let sim = sim.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                sim.borrow_mut()
                    .set_pointer(f64::from(event.offset_x()), f64::from(event.offset_y()));
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        canvas.add_event_listener_with_callback("mousemove", on_pointer.as_ref().unchecked_ref())?;

        // Refit the surface and rebuild the grids when the window resizes.
        let on_resize = {
            let sim = sim.clone();
            let canvas = canvas.clone();
            let ctx = ctx.clone();
            Closure::wrap(Box::new(move || {
                let (width, height) = fit_canvas(&canvas, &ctx);
                sim.borrow_mut().resize(width, height);
            }) as Box<dyn FnMut()>)
        };
        window()
            .ok_or("no window")?
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        // Frame loop. The closure keeps a handle to itself so each tick
        // can schedule the next; `running` plus the stored frame id give
        // `stop` a clean cancellation point.
        let running = Rc::new(Cell::new(true));
        let frame_id = Rc::new(Cell::new(0));
        let frame: FrameClosure = Rc::new(RefCell::new(None));
        {
            let running = running.clone();
            let frame_id = frame_id.clone();
            let handle = frame.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                if !running.get() {
                    return;
                }
                sim.borrow_mut().advance(&mut surface);
                if let Some(id) = request_frame(&handle) {
                    frame_id.set(id);
                }
            }) as Box<dyn FnMut()>));
        }
        if let Some(id) = request_frame(&frame) {
            frame_id.set(id);
        }

        Ok(ContourField {
            canvas,
            running,
            frame_id,
            frame,
            on_pointer,
            on_resize,
        })
    }

    /// Stop the frame loop and detach the listeners. Safe to call twice.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(w) = window() {
            let _ = w.cancel_animation_frame(self.frame_id.get());
            let _ = w.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
        }
        let _ = self.canvas.remove_event_listener_with_callback(
            "mousemove",
            self.on_pointer.as_ref().unchecked_ref(),
        );
        // Release the self-referential frame closure so its Rc cycle
        // unwinds.
        self.frame.borrow_mut().take();
        log::info!("contour field stopped");
    }

    /// Keep the effect running for the lifetime of the page by leaking
    /// the handle.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for ContourField {
    fn drop(&mut self) {
        self.stop();
    }
}
