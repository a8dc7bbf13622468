use super::InputWiring;
use crate::dom;
use globe_core::InputEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store and the camera in step with the container.
///
/// The GPU surface follows on the next frame, when the frame loop sees the
/// new canvas size.
pub fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let resize_closure = Closure::wrap(Box::new(move |ev: web::Event| {
        dom::sync_canvas_size(&w.canvas, &w.container);
        let (width, height) = dom::container_size(&w.container);
        w.dispatch(&ev, InputEvent::Resize { width, height });
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
