use crate::constants::WIDE_LAYOUT_MIN_WIDTH;
use crate::error::{GlobeError, Result};
use glam::Vec2;

/// Raw input the DOM layer forwards to the controller.
///
/// Pixel coordinates are CSS client coordinates (`clientX`/`clientY`).
/// Move events carry the layout snapshot read at event time so the
/// normalization does not need to query the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32, viewport: Viewport },
    PointerUp,
    TouchMove { x: f32, y: f32, viewport: Viewport },
    TouchEnd,
    /// New canvas container size in CSS pixels.
    Resize { width: f32, height: f32 },
}

/// Window inner size plus the canvas container's top offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub container_top: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, container_top: f32) -> Self {
        Self {
            width,
            height,
            container_top,
        }
    }

    #[inline]
    pub fn layout(&self, wide_min_width: f32) -> Layout {
        if self.width >= wide_min_width {
            Layout::Wide
        } else {
            Layout::Narrow
        }
    }
}

/// Page layout selected by the viewport-width breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Wide,
    Narrow,
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Normalized device coordinates; `None` until the first move.
    pub ndc: Option<Vec2>,
    pub down: bool,
    /// Last raw pixel position seen while dragging.
    pub prev: Option<Vec2>,
}

impl PointerState {
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.down = true;
        self.prev = Some(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.down = false;
    }

    /// Record a new pointer position and return the drag delta in pixels.
    ///
    /// Returns `None` when not dragging, or when there is no previous
    /// position to measure against yet (the position is still recorded).
    pub fn drag_to(&mut self, x: f32, y: f32) -> Option<Vec2> {
        if !self.down {
            return None;
        }
        let pos = Vec2::new(x, y);
        let delta = self.prev.map(|prev| pos - prev);
        self.prev = Some(pos);
        delta
    }
}

/// Map raw client coordinates to NDC using the layout's projection rule.
///
/// The wide rule re-centers x on the viewport midpoint and ignores the
/// container offset; both quirks are kept as the page was tuned against them.
pub fn normalize_pointer(x: f32, y: f32, viewport: &Viewport, wide_min_width: f32) -> Result<Vec2> {
    check_finite(x, y)?;
    check_viewport(viewport)?;
    let ndc = match viewport.layout(wide_min_width) {
        Layout::Wide => {
            let half_w = viewport.width / 2.0;
            Vec2::new(
                ((x - half_w) / half_w) * 2.0 - 1.0,
                -(y / viewport.height) * 2.0 + 1.0,
            )
        }
        Layout::Narrow => normalize_narrow(x, y, viewport),
    };
    log::trace!("[input] ({:.1},{:.1}) -> ndc ({:.3},{:.3})", x, y, ndc.x, ndc.y);
    Ok(ndc)
}

/// Container-relative rule; touch input always uses it.
pub fn normalize_touch(x: f32, y: f32, viewport: &Viewport) -> Result<Vec2> {
    check_finite(x, y)?;
    check_viewport(viewport)?;
    Ok(normalize_narrow(x, y, viewport))
}

#[inline]
fn normalize_narrow(x: f32, y: f32, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        (x / viewport.width) * 2.0 - 1.0,
        -((y - viewport.container_top) / viewport.height) * 2.0 + 1.0,
    )
}

#[inline]
fn check_finite(x: f32, y: f32) -> Result<()> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(GlobeError::NonFinitePointer { x, y })
    }
}

#[inline]
fn check_viewport(viewport: &Viewport) -> Result<()> {
    if viewport.width > 0.0 && viewport.height > 0.0 {
        Ok(())
    } else {
        Err(GlobeError::EmptyViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}
