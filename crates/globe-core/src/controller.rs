//! Top-level owner of all interaction state.
//!
//! DOM handlers translate browser events into [`InputEvent`]s and pass them to
//! [`GlobeController::handle`]; the frame loop calls [`GlobeController::frame`]
//! once per displayed frame. Both run on the page's single thread.

use crate::camera::{Camera, CameraParams};
use crate::constants::{
    DRAG_RADIANS_PER_PIXEL, ROTATION_EASE_SECONDS, STAR_COUNT, STAR_SEED, WIDE_LAYOUT_MIN_WIDTH,
};
use crate::input::{self, InputEvent, PointerState, Viewport};
use crate::pick::{self, Hits, PickParams, Ray};
use crate::rotation::RotationOffset;
use crate::scene::Scene;
use crate::tween::{Ease, RotationTween};
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct GlobeParams {
    pub radians_per_pixel: f32,
    pub wide_layout_min_width: f32,
    pub ease_duration_sec: f32,
    pub ease: Ease,
    pub camera: CameraParams,
    pub pick: PickParams,
    pub star_count: usize,
    pub star_seed: u64,
}

impl Default for GlobeParams {
    fn default() -> Self {
        Self {
            radians_per_pixel: DRAG_RADIANS_PER_PIXEL,
            wide_layout_min_width: WIDE_LAYOUT_MIN_WIDTH,
            ease_duration_sec: ROTATION_EASE_SECONDS,
            ease: Ease::default(),
            camera: CameraParams::default(),
            pick: PickParams::default(),
            star_count: STAR_COUNT,
            star_seed: STAR_SEED,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InteractionState {
    pub pointer: PointerState,
    pub offset: RotationOffset,
    pub rotation: RotationTween,
    pub camera: Camera,
}

/// What the DOM layer should do after an event was handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// Suppress the browser default (text selection, scroll, pinch-zoom).
    pub prevent_default: bool,
}

pub struct GlobeController {
    params: GlobeParams,
    state: InteractionState,
    scene: Scene,
}

impl GlobeController {
    /// Build the controller for a canvas container of the given CSS size.
    ///
    /// An empty container (not laid out yet) gets a square placeholder
    /// camera; the first resize with a real size replaces it.
    pub fn new(params: GlobeParams, container_width: f32, container_height: f32) -> Self {
        let camera = Camera::for_viewport(container_width, container_height, &params.camera)
            .unwrap_or_else(|e| {
                log::warn!("[camera] {}; using a square placeholder until resize", e);
                Camera::with_aspect(1.0, &params.camera)
            });
        let scene = Scene::new(params.star_count, params.star_seed);
        let state = InteractionState {
            pointer: PointerState::default(),
            offset: RotationOffset::default(),
            rotation: RotationTween::new(Vec2::ZERO, params.ease),
            camera,
        };
        Self {
            params,
            state,
            scene,
        }
    }

    pub fn params(&self) -> &GlobeParams {
        &self.params
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.state.camera
    }

    /// Picking ray through the last known pointer position.
    pub fn pointer_ray(&self) -> Option<Ray> {
        self.state
            .pointer
            .ndc
            .map(|ndc| self.state.camera.ray_through_ndc(ndc))
    }

    pub fn handle(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::PointerDown { x, y } => {
                if x.is_finite() && y.is_finite() {
                    self.state.pointer.pointer_down(x, y);
                }
                EventOutcome::default()
            }
            InputEvent::PointerMove { x, y, viewport } => self.pointer_move(x, y, &viewport),
            InputEvent::PointerUp | InputEvent::TouchEnd => {
                self.state.pointer.pointer_up();
                EventOutcome::default()
            }
            InputEvent::TouchMove { x, y, viewport } => self.touch_move(x, y, &viewport),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Advance the rotation tween and run the hover pick for this frame.
    pub fn frame(&mut self, dt_sec: f32) -> Hits {
        self.scene.group.rotation = self.state.rotation.update(dt_sec);
        let ray = self.pointer_ray();
        self.scene.highlight(ray, &self.params.pick)
    }

    fn pointer_move(&mut self, x: f32, y: f32, viewport: &Viewport) -> EventOutcome {
        match input::normalize_pointer(x, y, viewport, self.params.wide_layout_min_width) {
            Ok(ndc) => self.state.pointer.ndc = Some(ndc),
            Err(e) => {
                log::warn!("[input] pointer move ignored: {}", e);
                return EventOutcome::default();
            }
        }
        self.drag(x, y)
    }

    fn touch_move(&mut self, x: f32, y: f32, viewport: &Viewport) -> EventOutcome {
        // A touch that lands on the globe starts a drag without a touchstart.
        let on_globe = self
            .pointer_ray()
            .map(|ray| pick::hits_globe(&ray, &self.scene.group))
            .unwrap_or(false);
        if on_globe {
            self.state.pointer.down = true;
        }
        if !self.state.pointer.down {
            return EventOutcome::default();
        }
        match input::normalize_touch(x, y, viewport) {
            Ok(ndc) => self.state.pointer.ndc = Some(ndc),
            Err(e) => {
                log::warn!("[input] touch move ignored: {}", e);
                return EventOutcome::default();
            }
        }
        self.drag(x, y)
    }

    fn drag(&mut self, x: f32, y: f32) -> EventOutcome {
        if let Some(delta) = self.state.pointer.drag_to(x, y) {
            let target =
                self.state
                    .offset
                    .apply_delta(delta.x, delta.y, self.params.radians_per_pixel);
            self.state
                .rotation
                .to(target, self.params.ease_duration_sec);
            log::trace!(
                "[drag] delta=({:.1},{:.1}) target=({:.3},{:.3})",
                delta.x,
                delta.y,
                target.x,
                target.y
            );
        }
        EventOutcome {
            prevent_default: self.state.pointer.down,
        }
    }

    fn resize(&mut self, width: f32, height: f32) -> EventOutcome {
        match Camera::for_viewport(width, height, &self.params.camera) {
            Ok(camera) => {
                self.state.camera = camera;
                log::info!(
                    "[resize] {}x{} aspect={:.3}",
                    width,
                    height,
                    self.state.camera.aspect
                );
            }
            Err(e) => {
                log::warn!("[resize] keeping previous camera: {}", e);
            }
        }
        EventOutcome::default()
    }
}

