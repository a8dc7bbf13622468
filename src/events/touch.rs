use super::InputWiring;
use crate::dom;
use globe_core::InputEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_touch_handlers(w: &InputWiring) {
    wire_touchmove(w);
    wire_touchend(w);
}

fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        let viewport = dom::viewport_snapshot(&w.container);
        w.dispatch(
            &ev,
            InputEvent::TouchMove {
                x: touch.client_x() as f32,
                y: touch.client_y() as f32,
                viewport,
            },
        );
    }) as Box<dyn FnMut(_)>);

    // Non-passive so a drag on the globe can cancel page scroll and pinch-zoom
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }

    closure.forget();
}

fn wire_touchend(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        w.dispatch(&ev, InputEvent::TouchEnd);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
