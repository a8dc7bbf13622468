use thiserror::Error;

/// Inputs rejected by the interaction core.
///
/// None of these are fatal: the controller logs them and keeps its previous
/// state, the same way the renderer skips a zero-sized resize.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GlobeError {
    #[error("viewport must be non-empty (got {width}x{height})")]
    EmptyViewport { width: f32, height: f32 },
    #[error("pointer coordinates must be finite (got {x}, {y})")]
    NonFinitePointer { x: f32, y: f32 },
}

pub type Result<T> = std::result::Result<T, GlobeError>;
