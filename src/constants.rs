/// Page wiring and presentation constants for the web frontend.
///
/// Scene/interaction tuning lives in `globe_core::constants`; this module only
/// names DOM hooks, asset paths and colors the renderer needs.
// Element id of the canvas container the page lays out
pub const CONTAINER_ID: &str = "canvasContainer";

// Globe color map, relative to the page
pub const GLOBE_TEXTURE_URL: &str = "./img/globe.jpeg";

// Drawn until the globe texture arrives (dark ocean blue)
pub const PLACEHOLDER_TEXEL: [u8; 4] = [10, 24, 48, 255];

// Background behind the starfield
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

pub const STAR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// Multisample count for the scene pass (4 is the WebGPU-guaranteed count)
pub const MSAA_SAMPLES: u32 = 4;
