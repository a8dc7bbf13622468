use super::InputWiring;
use crate::dom;
use globe_core::InputEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(w: &InputWiring) {
    wire_mousedown(w);
    wire_mousemove(w);
    wire_mouseup(w);
}

// Drags may only start on the globe's container
fn wire_mousedown(w: &InputWiring) {
    let w = w.clone();
    let container_for_listener = w.container.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        w.dispatch(
            &ev,
            InputEvent::PointerDown {
                x: ev.client_x() as f32,
                y: ev.client_y() as f32,
            },
        );
    }) as Box<dyn FnMut(_)>);
    _ = container_for_listener
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Moves and releases are tracked window-wide so a drag survives leaving the canvas
fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let viewport = dom::viewport_snapshot(&w.container);
        w.dispatch(
            &ev,
            InputEvent::PointerMove {
                x: ev.client_x() as f32,
                y: ev.client_y() as f32,
                viewport,
            },
        );
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_mouseup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        w.dispatch(&ev, InputEvent::PointerUp);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
