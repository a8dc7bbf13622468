// Shared scene/interaction tuning constants used by the web frontend.

// Interaction
pub const DRAG_RADIANS_PER_PIXEL: f32 = 0.005; // pointer delta -> rotation offset
pub const WIDE_LAYOUT_MIN_WIDTH: f32 = 1280.0; // viewport breakpoint for pointer normalization
pub const ROTATION_EASE_SECONDS: f32 = 2.0; // tween duration toward the drag offset

// Frame gaps longer than the threshold (background tab, debugger pause)
// advance tweens by one short step instead
pub const LAG_THRESHOLD_SEC: f32 = 0.5;
pub const LAG_STEP_SEC: f32 = 0.033;

// Picking highlight
pub const PICK_DIM_OPACITY: f32 = 0.4;
pub const PICK_FULL_OPACITY: f32 = 1.0;

// Camera
pub const CAMERA_FOV_Y_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 15.0;

// Globe
pub const GLOBE_RADIUS: f32 = 5.0;
pub const GLOBE_WIDTH_SEGMENTS: u32 = 50;
pub const GLOBE_HEIGHT_SEGMENTS: u32 = 50;
pub const GLOBE_BASE_YAW: f32 = -std::f32::consts::FRAC_PI_2; // aligns the texture seam
pub const ATMOSPHERE_SCALE: f32 = 1.1;

// Rim/atmosphere tint shared by both globe shaders
pub const ATMOSPHERE_COLOR: [f32; 3] = [0.3, 0.6, 1.0];

// Starfield
pub const STAR_COUNT: usize = 10_000;
pub const STAR_SPREAD: f32 = 2000.0; // x/y extent, centered on 0
pub const STAR_DEPTH: f32 = 3000.0; // z extent behind the origin
pub const STAR_SEED: u64 = 42;

