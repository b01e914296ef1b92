use crate::keymap::action_for_key;
use crate::state::DialHandle;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, handle: &DialHandle) {
    // A focused slider already handles its own arrow keys.
    let from_input = ev
        .target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .is_some();
    if from_input || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    if let Some(action) = action_for_key(&ev.key()) {
        log::info!("[key] {} -> {:?}", ev.key(), action);
        handle.dispatch(&action);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(handle: DialHandle) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &handle);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
