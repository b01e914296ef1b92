use crate::controls;
use crate::render::DialRenderer;
use crate::state::DialHandle;
use dial_core::scene_commands;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub handle: DialHandle,
    pub renderer: DialRenderer,
    pub document: web::Document,
}

impl FrameContext {
    /// Redraw only when something marked the dial dirty since the last frame.
    pub fn frame(&mut self) {
        if !self.handle.take_dirty() {
            return;
        }
        let dial = self.handle.dial.borrow();
        self.renderer.draw(&scene_commands(&dial));
        controls::sync(&self.document, &dial);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
