#![cfg(target_arch = "wasm32")]
use crate::core::Session;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod loading;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-landing starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .query_selector("canvas.webgl")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing canvas.webgl"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::disable_scroll_restoration(&window);

    let viewport = dom::viewport_size(&window);
    dom::sync_canvas_backing_size(&canvas, viewport);
    let scroll = window.scroll_y().unwrap_or(0.0) as f32;
    let session = Rc::new(RefCell::new(Session::new(viewport, scroll)));
    log::info!(
        "[init] viewport {}x{} scroll={}",
        viewport.width,
        viewport.height,
        scroll
    );

    let images = assets::load_textures(&window, &document).await;
    let gpu = frame::init_gpu(&canvas, &session, &images).await;

    events::wire_pointer_handlers(events::PointerWiring {
        session: session.clone(),
    });
    events::wire_window_handlers(events::WindowWiring {
        canvas: canvas.clone(),
        session: session.clone(),
    });

    // Frame loop driven by requestAnimationFrame
    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        canvas,
        gpu,
        started: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
