use globe_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_container(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn find_canvas(container: &web::HtmlElement) -> anyhow::Result<web::HtmlCanvasElement> {
    container
        .query_selector("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no <canvas> inside container"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Container layout size in CSS pixels.
#[inline]
pub fn container_size(container: &web::HtmlElement) -> (f32, f32) {
    (container.offset_width() as f32, container.offset_height() as f32)
}

/// Window inner size and the container's current top offset.
pub fn viewport_snapshot(container: &web::HtmlElement) -> Viewport {
    let (width, height) = web::window()
        .map(|w| {
            let iw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let ih = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (iw as f32, ih as f32)
        })
        .unwrap_or((0.0, 0.0));
    let top = container.get_bounding_client_rect().top() as f32;
    Viewport::new(width, height, top)
}

/// Size the canvas to its container: CSS size for layout, CSS size times
/// devicePixelRatio for the backing store.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, container: &web::HtmlElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let (css_w, css_h) = container_size(container);
        let style = canvas.style();
        _ = style.set_property("width", &format!("{}px", css_w));
        _ = style.set_property("height", &format!("{}px", css_h));
        let w_px = (css_w as f64 * dpr) as u32;
        let h_px = (css_h as f64 * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
