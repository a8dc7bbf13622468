use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Decoded RGBA8 image ready for upload.
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Fetch an image over HTTP and decode it to RGBA8.
pub async fn fetch_rgba(url: &str) -> anyhow::Result<RgbaImage> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {} failed: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {} returned HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();

    let decoded = image::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    log::info!("[assets] {} decoded {}x{}", url, width, height);
    Ok(RgbaImage {
        width,
        height,
        pixels: decoded.into_raw(),
    })
}
