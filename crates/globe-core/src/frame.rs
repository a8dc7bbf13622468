//! Cooperative render loop driven by an external frame clock.
//!
//! Each tick first asks the clock for the next frame and then runs the
//! handler, so a handler that errors or stalls never stops the loop. There is
//! no stop state: once started, the loop lives as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

/// Source of display-synchronized callbacks (requestAnimationFrame on the web).
pub trait FrameClock {
    fn request_next_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Work done once per displayed frame.
pub trait FrameHandler {
    fn on_frame(&mut self);
}

/// Run the first tick now and keep rescheduling through `clock`.
pub fn start_loop<C, H>(clock: Rc<C>, handler: Rc<RefCell<H>>)
where
    C: FrameClock + 'static,
    H: FrameHandler + 'static,
{
    tick(clock, handler);
}

fn tick<C, H>(clock: Rc<C>, handler: Rc<RefCell<H>>)
where
    C: FrameClock + 'static,
    H: FrameHandler + 'static,
{
    let next_clock = clock.clone();
    let next_handler = handler.clone();
    clock.request_next_frame(Box::new(move || tick(next_clock, next_handler)));
    handler.borrow_mut().on_frame();
}
