pub mod pointer;
pub mod resize;
pub mod touch;

use globe_core::{EventOutcome, GlobeController, InputEvent};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use pointer::wire_pointer_handlers;
pub use resize::wire_resize;
pub use touch::wire_touch_handlers;

/// Everything a DOM listener needs to forward events to the controller.
#[derive(Clone)]
pub struct InputWiring {
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub controller: Rc<RefCell<GlobeController>>,
}

impl InputWiring {
    /// Forward one event and apply the outcome to the originating DOM event.
    pub(crate) fn dispatch(&self, ev: &web::Event, input: InputEvent) -> EventOutcome {
        let outcome = self.controller.borrow_mut().handle(input);
        if outcome.prevent_default {
            ev.prevent_default();
        }
        outcome
    }
}
