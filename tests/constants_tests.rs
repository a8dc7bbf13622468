// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use globe_core::constants as core;

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_hooks_are_set() {
    assert!(!CONTAINER_ID.is_empty());
    assert!(!CONTAINER_ID.starts_with('#'));
    assert!(GLOBE_TEXTURE_URL.ends_with(".jpeg"));
}

#[test]
fn placeholder_and_clear_are_opaque() {
    assert_eq!(PLACEHOLDER_TEXEL[3], 255);
    assert_eq!(CLEAR_COLOR.a, 1.0);
    assert_eq!(STAR_COLOR, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sits_outside_the_atmosphere() {
    let atmosphere_radius = core::GLOBE_RADIUS * core::ATMOSPHERE_SCALE;
    assert!(core::CAMERA_Z - core::CAMERA_ZNEAR > atmosphere_radius);
    assert!(core::CAMERA_ZFAR > core::CAMERA_Z + core::STAR_DEPTH * 0.3);
    assert!(core::ATMOSPHERE_SCALE > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_constants_have_logical_relationships() {
    assert!(core::DRAG_RADIANS_PER_PIXEL > 0.0);
    assert!(core::ROTATION_EASE_SECONDS > 0.0);
    // a lag step must itself never trigger lag smoothing
    assert!(core::LAG_STEP_SEC < core::LAG_THRESHOLD_SEC);
    assert!(core::PICK_DIM_OPACITY < core::PICK_FULL_OPACITY);
    assert!(core::PICK_FULL_OPACITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_pass_is_multisampled() {
    // 4x is the only count WebGPU guarantees for every renderable format
    assert_eq!(MSAA_SAMPLES, 4);
}
