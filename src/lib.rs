#![cfg(target_arch = "wasm32")]
use dial_core::{DialConfig, DragGesture, PitchDial};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod input;
mod keymap;
mod offline;
mod render;
mod state;

use constants::{DIAL_CANVAS_ID, MODE_ATTRIBUTE, SERVICE_WORKER_URL};
use state::DialHandle;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, handle: &DialHandle) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let handle_resize = handle.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        handle_resize.mark_dirty();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Product variant from the canvas's `data-mode` attribute.
fn read_config(canvas: &web::HtmlCanvasElement) -> DialConfig {
    match canvas.get_attribute(MODE_ATTRIBUTE) {
        None => DialConfig::default(),
        Some(mode) => DialConfig::from_mode_name(&mode).unwrap_or_else(|| {
            log::warn!("unknown {} {:?}; using transposer", MODE_ATTRIBUTE, mode);
            DialConfig::default()
        }),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pitch-dial starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    offline::register_service_worker(SERVICE_WORKER_URL);
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, DIAL_CANVAS_ID)?;

    let config = read_config(&canvas);
    log::info!("[dial] config {:?}", config);
    let handle = DialHandle::new(PitchDial::new(config));

    wire_canvas_resize(&canvas, &handle);

    controls::build_overlay_buttons(&document, &config)?;
    controls::wire_action_buttons(&document, &handle);
    if let Err(e) = controls::wire_rotation_input(&document, &handle) {
        // The slider is optional; buttons, keys and dragging still work.
        log::warn!("[controls] {:?}", e);
    }

    events::wire_global_keydown(handle.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        handle: handle.clone(),
        drag: Rc::new(RefCell::new(DragGesture::default())),
    });

    let renderer = render::DialRenderer::new(&canvas)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        handle,
        renderer,
        document,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
