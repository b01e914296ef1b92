use dial_core::{DialAction, PitchDial};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// The dial model plus the redraw flag, shared by every event closure.
#[derive(Clone)]
pub struct DialHandle {
    pub dial: Rc<RefCell<PitchDial>>,
    dirty: Rc<Cell<bool>>,
}

impl DialHandle {
    pub fn new(dial: PitchDial) -> Self {
        Self {
            dial: Rc::new(RefCell::new(dial)),
            // first frame always draws
            dirty: Rc::new(Cell::new(true)),
        }
    }

    /// Apply an action; catalogue errors are logged, never raised.
    pub fn dispatch(&self, action: &DialAction) {
        let result = self.dial.borrow_mut().apply(action);
        match result {
            Ok(true) => {
                log::info!("[dial] {:?}", action);
                self.mark_dirty();
            }
            Ok(false) => {}
            Err(e) => log::error!("[dial] {}", e),
        }
    }

    #[inline]
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Clear the redraw flag, returning whether a redraw was pending.
    #[inline]
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }
}
