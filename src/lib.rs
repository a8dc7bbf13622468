#![cfg(target_arch = "wasm32")]
use globe_core::{start_loop, GlobeController, GlobeParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = dom::find_container(&document, constants::CONTAINER_ID)?;
    let canvas = dom::find_canvas(&container)?;

    // Backing store must be sized before the surface is configured
    dom::sync_canvas_size(&canvas, &container);
    let (width, height) = dom::container_size(&container);
    let controller = GlobeController::new(GlobeParams::default(), width, height);
    let star_positions = controller.scene().stars.flat_positions();
    let controller = Rc::new(RefCell::new(controller));

    let gpu = frame::init_gpu(&canvas, &star_positions).await;

    let wiring = events::InputWiring {
        container: container.clone(),
        canvas: canvas.clone(),
        controller: controller.clone(),
    };
    events::wire_pointer_handlers(&wiring);
    events::wire_touch_handlers(&wiring);
    events::wire_resize(&wiring);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    start_loop(Rc::new(frame::RafClock), frame_ctx.clone());

    // The placeholder texture stays if the image never arrives
    spawn_local(async move {
        match assets::fetch_rgba(constants::GLOBE_TEXTURE_URL).await {
            Ok(img) => {
                if let Some(g) = &mut frame_ctx.borrow_mut().gpu {
                    if let Err(e) = g.set_globe_texture(&img.pixels, img.width, img.height) {
                        log::warn!("globe texture rejected: {:?}", e);
                    }
                }
            }
            Err(e) => log::warn!("globe texture load failed: {:?}", e),
        }
    });

    Ok(())
}
