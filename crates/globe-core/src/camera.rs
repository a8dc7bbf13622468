//! Perspective camera for the globe scene.
//!
//! The camera never moves after construction: it sits on the +Z axis and
//! looks down -Z at the origin. A resize builds a brand-new camera with the
//! new aspect ratio rather than mutating the old one.

use crate::constants::{CAMERA_FOV_Y_DEGREES, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::error::{GlobeError, Result};
use crate::pick::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Lens and placement used whenever a camera is (re)built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    pub eye_z: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fovy_degrees: CAMERA_FOV_Y_DEGREES,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            eye_z: CAMERA_Z,
        }
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Build a camera for a container of `width` x `height` CSS pixels.
    pub fn for_viewport(width: f32, height: f32, params: &CameraParams) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(GlobeError::EmptyViewport { width, height });
        }
        Ok(Self::with_aspect(width / height, params))
    }

    /// Build a camera for a known aspect ratio.
    pub fn with_aspect(aspect: f32, params: &CameraParams) -> Self {
        let eye = Vec3::new(0.0, 0.0, params.eye_z);
        Self {
            eye,
            // looks straight down -Z, no explicit look-at target
            target: eye - Vec3::Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: params.fovy_degrees.to_radians(),
            znear: params.znear,
            zfar: params.zfar,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space picking ray through a point in normalized device coordinates.
    ///
    /// The ray starts at the eye and passes through the unprojected point at
    /// mid depth, so `ndc = (0, 0)` looks straight at the origin.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p = inv * Vec4::new(ndc.x, ndc.y, 0.5, 1.0);
        let p: Vec3 = p.truncate() / p.w;
        Ray::new(self.eye, (p - self.eye).normalize())
    }
}
