use crate::core::Session;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct WindowWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<Session>>,
}

pub fn wire_window_handlers(w: WindowWiring) {
    wire_scroll(&w);
    wire_resize(&w);
}

fn wire_scroll(w: &WindowWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(wnd) = web::window() {
            let y = wnd.scroll_y().unwrap_or(0.0) as f32;
            w.session.borrow_mut().set_scroll(y);
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// The renderer picks up the new backing size on the next frame.
fn wire_resize(w: &WindowWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(wnd) = web::window() {
            let viewport = dom::viewport_size(&wnd);
            w.session
                .borrow_mut()
                .resize(viewport.width, viewport.height);
            dom::sync_canvas_backing_size(&w.canvas, viewport);
            log::debug!("[resize] {}x{}", viewport.width, viewport.height);
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
