use crate::render::{self, SceneFrame};
use globe_core::{lag_smoothed_dt, FrameClock, FrameHandler, GlobeController};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// requestAnimationFrame as a [`FrameClock`].
pub struct RafClock;

impl FrameClock for RafClock {
    fn request_next_frame(&self, callback: Box<dyn FnOnce()>) {
        let Some(w) = web::window() else {
            log::error!("no window; render loop stopped");
            return;
        };
        let cb = Closure::once_into_js(move || callback());
        if let Err(e) = w.request_animation_frame(cb.unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

pub struct FrameContext<'a> {
    pub controller: Rc<RefCell<GlobeController>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameHandler for FrameContext<'a> {
    fn on_frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = lag_smoothed_dt(dt.as_secs_f32());

        let scene_frame = {
            let mut controller = self.controller.borrow_mut();
            let hits = controller.frame(dt_sec);
            if !hits.is_empty() {
                log::trace!("[pick] {} box hit(s), nearest {:?}", hits.len(), hits[0].node);
            }
            let camera = controller.camera();
            SceneFrame {
                view: camera.view_matrix(),
                view_proj: camera.view_proj(),
                globe_model: controller.scene().globe_model(),
                atmosphere_model: controller.scene().atmosphere.transform,
            }
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&scene_frame) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    star_positions: &[[f32; 3]],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, star_positions).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}
