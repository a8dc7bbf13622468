// Host-side tests for tweening, scene assets and the frame loop.

use globe_core::*;
use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn quad_out_ease_endpoints() {
    assert_eq!(Ease::QuadOut.apply(0.0), 0.0);
    assert_eq!(Ease::QuadOut.apply(1.0), 1.0);
    assert!((Ease::QuadOut.apply(0.5) - 0.75).abs() < 1e-6);
    assert_eq!(Ease::Linear.apply(2.0), 1.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let mut tw = RotationTween::new(Vec2::ZERO, Ease::Linear);
    tw.to(Vec2::new(1.0, 0.0), 2.0);
    tw.update(1.0);
    assert!((tw.current().x - 0.5).abs() < 1e-6);

    tw.to(Vec2::new(0.5, 1.0), 2.0);
    assert_eq!(tw.current(), Vec2::new(0.5, 0.0));
    tw.update(1.0);
    assert!((tw.current() - Vec2::new(0.5, 0.5)).length() < 1e-6);
    tw.update(5.0);
    assert_eq!(tw.current(), Vec2::new(0.5, 1.0));
    assert!(!tw.is_active());
}

#[test]
fn zero_duration_snaps() {
    let mut tw = RotationTween::new(Vec2::ZERO, Ease::QuadOut);
    tw.to(Vec2::new(2.0, 3.0), 0.0);
    assert_eq!(tw.current(), Vec2::new(2.0, 3.0));
    assert_eq!(tw.update(0.1), Vec2::new(2.0, 3.0));
}

#[test]
fn long_frame_gaps_are_smoothed() {
    assert_eq!(lag_smoothed_dt(0.016), 0.016);
    assert_eq!(lag_smoothed_dt(3.0), LAG_STEP_SEC);
    assert_eq!(lag_smoothed_dt(-1.0), 0.0);
}

#[test]
fn sphere_has_three_js_layout() {
    let mesh = generate_sphere(5.0, 50, 50);
    assert_eq!(mesh.vertices.len(), 51 * 51);
    // pole rows contribute one triangle per segment, the rest two
    assert_eq!(mesh.triangle_count(), 50 * 50 * 2 - 2 * 50);
    let max_index = *mesh.indices.iter().max().unwrap();
    assert!((max_index as usize) < mesh.vertices.len());
    for v in &mesh.vertices {
        let len = Vec3::from(v.position).length();
        assert!((len - 5.0).abs() < 1e-4);
    }
    assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
    assert!(mesh.vertices[0].position[1] > 4.99);
}

#[test]
fn sphere_clamps_degenerate_arguments() {
    let mesh = generate_sphere(-1.0, 1, 0);
    assert_eq!(mesh.vertices.len(), 4 * 3);
    assert!(mesh.triangle_count() > 0);
}

#[test]
fn starfield_is_seeded_and_bounded() {
    let a = Starfield::generate(500, STAR_SEED);
    let b = Starfield::generate(500, STAR_SEED);
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.flat_positions().len(), 500);
    for p in &a.positions {
        assert!(p.x >= -STAR_SPREAD / 2.0 && p.x < STAR_SPREAD / 2.0);
        assert!(p.y >= -STAR_SPREAD / 2.0 && p.y < STAR_SPREAD / 2.0);
        assert!(p.z <= 0.0 && p.z > -STAR_DEPTH);
    }
}

#[test]
fn default_scene_matches_page() {
    let scene = Scene::new(STAR_COUNT, STAR_SEED);
    assert_eq!(scene.stars.positions.len(), 10_000);
    assert_eq!(scene.group.children.len(), 1);
    let globe = scene.group.globe().unwrap();
    assert_eq!(globe.geometry, Geometry::Sphere { radius: 5.0 });
    // the u = 0 seam starts on -X and is turned to face away from the camera
    let seam = scene.globe_model().transform_vector3(Vec3::NEG_X);
    assert!((seam - Vec3::NEG_Z).length() < 1e-5);
    let shell = scene.atmosphere.transform.transform_vector3(Vec3::X);
    assert!((shell.x - 1.1).abs() < 1e-6);
}

struct ManualClock {
    pending: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl ManualClock {
    fn new() -> Self {
        Self {
            pending: RefCell::new(Vec::new()),
        }
    }

    fn advance(&self) {
        let due: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for cb in due {
            cb();
        }
    }

    fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl FrameClock for ManualClock {
    fn request_next_frame(&self, callback: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push(callback);
    }
}

struct Counter {
    frames: u32,
}

impl FrameHandler for Counter {
    fn on_frame(&mut self) {
        self.frames += 1;
    }
}

#[test]
fn loop_runs_first_frame_immediately_and_reschedules() {
    let clock = Rc::new(ManualClock::new());
    let counter = Rc::new(RefCell::new(Counter { frames: 0 }));
    start_loop(clock.clone(), counter.clone());
    assert_eq!(counter.borrow().frames, 1);
    assert_eq!(clock.pending(), 1);

    for _ in 0..3 {
        clock.advance();
    }
    assert_eq!(counter.borrow().frames, 4);
    assert_eq!(clock.pending(), 1);
}

struct ControllerFrames {
    controller: GlobeController,
}

impl FrameHandler for ControllerFrames {
    fn on_frame(&mut self) {
        self.controller.frame(0.5);
    }
}

#[test]
fn loop_drives_rotation_to_target() {
    let params = GlobeParams {
        star_count: 0,
        ..Default::default()
    };
    let mut controller = GlobeController::new(params, 800.0, 600.0);
    let vp = Viewport::new(800.0, 600.0, 0.0);
    controller.handle(InputEvent::PointerDown { x: 0.0, y: 0.0 });
    controller.handle(InputEvent::PointerMove {
        x: 0.0,
        y: 100.0,
        viewport: vp,
    });

    let clock = Rc::new(ManualClock::new());
    let handler = Rc::new(RefCell::new(ControllerFrames { controller }));
    start_loop(clock.clone(), handler.clone());
    for _ in 0..4 {
        clock.advance();
    }
    let rotation = handler.borrow().controller.scene().group.rotation;
    assert!((rotation - Vec2::new(0.5, 0.0)).length() < 1e-6);
}
