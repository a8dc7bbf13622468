pub mod camera;
pub mod constants;
pub mod controller;
pub mod error;
pub mod frame;
pub mod input;
pub mod mesh;
pub mod pick;
pub mod rotation;
pub mod scene;
pub mod tween;

pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");
pub static ATMOSPHERE_WGSL: &str = include_str!("../shaders/atmosphere.wgsl");
pub static STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");

pub use camera::*;
pub use constants::*;
pub use controller::*;
pub use error::GlobeError;
pub use frame::*;
pub use input::*;
pub use mesh::*;
pub use pick::*;
pub use rotation::*;
pub use scene::*;
pub use tween::*;
