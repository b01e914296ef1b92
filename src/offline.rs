use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// What to do about the offline worker on this page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    Skip(&'static str),
    Now,
    /// Wait for the window `load` event so the first paint goes first.
    OnLoad,
}

pub fn registration_plan(protocol: &str, supported: bool, loaded: bool) -> Registration {
    if protocol == "file:" {
        Registration::Skip("skipped for file: pages")
    } else if !supported {
        Registration::Skip("service workers unsupported")
    } else if loaded {
        Registration::Now
    } else {
        Registration::OnLoad
    }
}

fn register_now(url: &'static str) {
    let Some(window) = web::window() else {
        return;
    };
    let promise = window.navigator().service_worker().register(url);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("[offline] service worker registered"),
            Err(e) => log::error!("[offline] service worker registration failed: {:?}", e),
        }
    });
}

/// Register the offline service worker once the page has loaded. Failures
/// are logged and otherwise ignored; the dial works the same without it.
pub fn register_service_worker(url: &'static str) {
    let Some(window) = web::window() else {
        return;
    };
    let protocol = window.location().protocol().unwrap_or_default();
    let supported =
        js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("serviceWorker"))
            .unwrap_or(false);
    let loaded = window
        .document()
        .is_some_and(|d| d.ready_state() == "complete");

    match registration_plan(&protocol, supported, loaded) {
        Registration::Skip(reason) => log::info!("[offline] {}", reason),
        Registration::Now => register_now(url),
        Registration::OnLoad => {
            let on_load = Closure::once_into_js(move || register_now(url));
            if let Err(e) = window.add_event_listener_with_callback("load", on_load.unchecked_ref()) {
                log::error!("[offline] could not wait for load: {:?}", e);
            }
        }
    }
}
