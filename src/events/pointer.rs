use crate::input;
use crate::state::DialHandle;
use dial_core::{hit_test, pointer_angle, DialAction, DragGesture, Ring, REFERENCE_RING};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub handle: DialHandle,
    pub drag: Rc<RefCell<DragGesture>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    for event in ["pointerup", "pointercancel", "lostpointercapture"] {
        wire_release(&w, event);
    }
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_view_pos(&ev, &w.canvas);
        let (wheel_degrees, rotation, can_select) = {
            let dial = w.handle.dial.borrow();
            (
                dial.wheel_degrees(),
                dial.rotation(),
                dial.config().reference_selection,
            )
        };

        match hit_test(pos, wheel_degrees) {
            Some((Ring::Inner, _)) => {
                w.drag.borrow_mut().begin(pointer_angle(pos), rotation);
                _ = w.canvas.set_pointer_capture(ev.pointer_id());
                log::info!("[drag] begin at step {}", rotation.value());
            }
            Some((ring, pc)) if ring == REFERENCE_RING && can_select => {
                log::info!("[click] reference {}", pc);
                w.handle.dispatch(&DialAction::SelectReference(pc));
            }
            _ => {}
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let drag = *w.drag.borrow();
        if !drag.is_dragging() {
            return;
        }
        let pos = input::pointer_view_pos(&ev, &w.canvas);
        let changed = drag.drag_to(pointer_angle(pos), &mut w.handle.dial.borrow_mut());
        if changed {
            w.handle.mark_dirty();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_release(w: &InputWiring, event: &str) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        if w.drag.borrow_mut().end() {
            log::info!(
                "[drag] end at step {}",
                w.handle.dial.borrow().rotation().value()
            );
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
