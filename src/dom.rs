use crate::constants::MAX_PIXEL_RATIO;
use crate::core::CursorStyle;
use crate::input::Viewport;
use web_sys as web;

/// Inner window size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Viewport {
    let css = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(css(window.inner_width()), css(window.inner_height()))
}

/// Size the canvas backing store to the viewport times the clamped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let w_px = (viewport.width as f64 * dpr) as u32;
        let h_px = (viewport.height as f64 * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Start every visit at the top so the camera and the page agree.
pub fn disable_scroll_restoration(window: &web::Window) {
    if let Ok(history) = window.history() {
        _ = history.set_scroll_restoration(web::ScrollRestoration::Manual);
    }
}

#[inline]
pub fn set_cursor(canvas: &web::HtmlCanvasElement, style: CursorStyle) {
    _ = canvas.style().set_property("cursor", style.as_css());
}
