use glam::Vec2;

/// Accumulated drag rotation in radians that the eased group rotation chases.
///
/// `x` is pitch (driven by vertical drags), `y` is yaw (horizontal drags).
/// Unbounded: no wraparound and no clamping.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct RotationOffset {
    pub x: f32,
    pub y: f32,
}

impl RotationOffset {
    /// Fold a pixel drag delta into the offset and return the new target.
    pub fn apply_delta(&mut self, delta_x: f32, delta_y: f32, radians_per_pixel: f32) -> Vec2 {
        self.x += delta_y * radians_per_pixel;
        self.y += delta_x * radians_per_pixel;
        self.as_vec2()
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
