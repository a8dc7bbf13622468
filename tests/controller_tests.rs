// Host-side tests driving the controller with synthetic input events.

use globe_core::*;
use glam::{Mat4, Vec2, Vec3};

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-5
}

fn controller(width: f32, height: f32) -> GlobeController {
    let params = GlobeParams {
        star_count: 16,
        ..Default::default()
    };
    GlobeController::new(params, width, height)
}

#[test]
fn mouse_drag_sets_offset_and_starts_tween() {
    let mut c = controller(1920.0, 1080.0);
    let vp = Viewport::new(1920.0, 1080.0, 0.0);

    let out = c.handle(InputEvent::PointerDown { x: 640.0, y: 360.0 });
    assert!(!out.prevent_default);
    let out = c.handle(InputEvent::PointerMove {
        x: 660.0,
        y: 370.0,
        viewport: vp,
    });
    assert!(out.prevent_default);

    let s = c.state();
    assert!((s.offset.x - 0.05).abs() < 1e-6);
    assert!((s.offset.y - 0.1).abs() < 1e-6);
    assert!(approx(s.rotation.target(), Vec2::new(0.05, 0.1)));
    assert_eq!(s.rotation.duration_sec(), 2.0);
    assert!(s.rotation.is_active());
}

#[test]
fn hover_without_press_only_updates_ndc() {
    let mut c = controller(800.0, 600.0);
    let vp = Viewport::new(800.0, 600.0, 0.0);
    let out = c.handle(InputEvent::PointerMove {
        x: 400.0,
        y: 300.0,
        viewport: vp,
    });
    assert_eq!(out, EventOutcome::default());
    assert_eq!(c.state().pointer.ndc, Some(Vec2::ZERO));
    assert_eq!(c.state().offset, RotationOffset::default());
}

#[test]
fn release_stops_the_drag_but_keeps_offset() {
    let mut c = controller(800.0, 600.0);
    let vp = Viewport::new(800.0, 600.0, 0.0);
    c.handle(InputEvent::PointerDown { x: 100.0, y: 100.0 });
    c.handle(InputEvent::PointerMove {
        x: 110.0,
        y: 100.0,
        viewport: vp,
    });
    c.handle(InputEvent::PointerUp);
    let before = c.state().offset;
    c.handle(InputEvent::PointerMove {
        x: 300.0,
        y: 300.0,
        viewport: vp,
    });
    assert!(!c.state().pointer.down);
    assert_eq!(c.state().offset, before);
}

#[test]
fn offsets_accumulate_across_drags() {
    let mut c = controller(800.0, 600.0);
    let vp = Viewport::new(800.0, 600.0, 0.0);
    for _ in 0..2 {
        c.handle(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        c.handle(InputEvent::PointerMove {
            x: 100.0,
            y: 0.0,
            viewport: vp,
        });
        c.handle(InputEvent::PointerUp);
    }
    assert!((c.state().offset.y - 1.0).abs() < 1e-5);
    assert_eq!(c.state().offset.x, 0.0);
}

#[test]
fn touch_on_globe_starts_a_drag() {
    let mut c = controller(800.0, 600.0);
    let vp = Viewport::new(800.0, 600.0, 0.0);
    // hover to the globe center so the stored pointer ray hits it
    c.handle(InputEvent::PointerMove {
        x: 400.0,
        y: 300.0,
        viewport: vp,
    });

    let out = c.handle(InputEvent::TouchMove {
        x: 400.0,
        y: 300.0,
        viewport: vp,
    });
    assert!(out.prevent_default);
    assert!(c.state().pointer.down);
    assert_eq!(c.state().offset, RotationOffset::default());

    c.handle(InputEvent::TouchMove {
        x: 410.0,
        y: 300.0,
        viewport: vp,
    });
    assert!((c.state().offset.y - 0.05).abs() < 1e-6);

    c.handle(InputEvent::TouchEnd);
    assert!(!c.state().pointer.down);
}

#[test]
fn touch_off_globe_is_ignored() {
    let mut c = controller(800.0, 600.0);
    let vp = Viewport::new(800.0, 600.0, 0.0);
    let out = c.handle(InputEvent::TouchMove {
        x: 5.0,
        y: 5.0,
        viewport: vp,
    });
    assert!(!out.prevent_default);
    assert!(!c.state().pointer.down);
    assert_eq!(c.state().pointer.ndc, None);
}

#[test]
fn frame_eases_group_rotation_toward_target() {
    let mut c = controller(1920.0, 1080.0);
    let vp = Viewport::new(1920.0, 1080.0, 0.0);
    c.handle(InputEvent::PointerDown { x: 640.0, y: 360.0 });
    c.handle(InputEvent::PointerMove {
        x: 660.0,
        y: 370.0,
        viewport: vp,
    });

    c.frame(1.0);
    // quad-out at t = 0.5 covers 75% of the way
    assert!(approx(c.scene().group.rotation, Vec2::new(0.0375, 0.075)));
    c.frame(1.5);
    assert!(approx(c.scene().group.rotation, Vec2::new(0.05, 0.1)));
    assert!(!c.state().rotation.is_active());
}

#[test]
fn resize_replaces_camera() {
    let mut c = controller(1024.0, 768.0);
    let out = c.handle(InputEvent::Resize {
        width: 800.0,
        height: 600.0,
    });
    assert_eq!(out, EventOutcome::default());
    assert!((c.camera().aspect - 800.0 / 600.0).abs() < 1e-6);
    assert_eq!(c.camera().eye, Vec3::new(0.0, 0.0, 15.0));
}

#[test]
fn zero_size_resize_keeps_previous_camera() {
    let mut c = controller(1024.0, 768.0);
    let before = c.camera().clone();
    c.handle(InputEvent::Resize {
        width: 0.0,
        height: 600.0,
    });
    assert_eq!(*c.camera(), before);
}

#[test]
fn empty_container_starts_with_placeholder_until_resize() {
    let mut c = controller(0.0, 0.0);
    assert_eq!(c.camera().aspect, 1.0);
    assert_eq!(c.camera().eye, Vec3::new(0.0, 0.0, 15.0));

    c.handle(InputEvent::Resize {
        width: 800.0,
        height: 600.0,
    });
    assert!((c.camera().aspect - 800.0 / 600.0).abs() < 1e-6);

    // input and frames keep working before the first real size arrives
    let mut c = controller(0.0, 0.0);
    c.handle(InputEvent::PointerDown { x: 0.0, y: 0.0 });
    c.handle(InputEvent::PointerMove {
        x: 10.0,
        y: 0.0,
        viewport: Viewport::new(800.0, 600.0, 0.0),
    });
    c.frame(0.016);
    assert!((c.state().offset.y - 0.05).abs() < 1e-6);
}

#[test]
fn hover_highlights_box_under_pointer() {
    let mut c = controller(800.0, 600.0);
    let near = c.scene_mut().group.add_child(
        Geometry::Box {
            size: Vec3::splat(2.0),
        },
        Mat4::from_translation(Vec3::new(0.0, 0.0, 7.0)),
    );
    let far = c.scene_mut().group.add_child(
        Geometry::Box {
            size: Vec3::splat(2.0),
        },
        Mat4::from_translation(Vec3::new(6.0, 0.0, 0.0)),
    );

    // no pointer yet: everything dims
    let hits = c.frame(0.016);
    assert!(hits.is_empty());
    assert!(c.scene().group.children.iter().all(|n| n.opacity == 0.4));

    let vp = Viewport::new(800.0, 600.0, 0.0);
    c.handle(InputEvent::PointerMove {
        x: 400.0,
        y: 300.0,
        viewport: vp,
    });
    let hits = c.frame(0.016);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].node, near);
    assert!((hits[0].distance - 7.0).abs() < 1e-3);

    let group = &c.scene().group;
    assert_eq!(group.node(near).unwrap().opacity, 1.0);
    assert_eq!(group.node(far).unwrap().opacity, 0.4);
    // the globe is never raised by the highlight
    assert_eq!(group.globe().unwrap().opacity, 0.4);
}
