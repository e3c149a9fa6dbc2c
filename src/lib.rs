//! Animated contour-line background: layered Perlin noise rendered as
//! marching-squares isolines on a 2D canvas.
//!
//! The algorithmic core (grid, field, contour, simulation) is target
//! independent and runs under plain `cargo test`; everything browser
//! facing lives behind `target_arch = "wasm32"`.

pub mod config;
pub mod contour;
pub mod field;
pub mod grid;
pub mod simulation;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    pub mod render;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    /// Element id the module binds to on load when the page does not
    /// attach explicitly.
    const CANVAS_ID: &str = "c";

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let Some(element) = document.get_element_by_id(CANVAS_ID) else {
            log::info!("no #{CANVAS_ID} canvas on this page; waiting for an explicit attach");
            return Ok(());
        };
        let canvas = element.dyn_into::<web_sys::HtmlCanvasElement>()?;
        // Nothing to render without a usable context; leave the page alone.
        match render::ContourField::attach(canvas) {
            Ok(field) => field.forget(),
            Err(err) => log::warn!("contour field failed to start: {err:?}"),
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::render::ContourField;
