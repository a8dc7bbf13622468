//! Time-based easing of the globe group's rotation.
//!
//! A tween is advanced by the frame loop, never by a timer of its own. Issuing
//! a new tween while one is in flight restarts from the current interpolated
//! value toward the new target, so the most recent drag always wins.

use crate::constants::{LAG_STEP_SEC, LAG_THRESHOLD_SEC};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out, `1 - (1 - t)^2`.
    #[default]
    QuadOut,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RotationTween {
    current: Vec2,
    from: Vec2,
    target: Vec2,
    elapsed_sec: f32,
    duration_sec: f32,
    ease: Ease,
    active: bool,
}

impl RotationTween {
    pub fn new(initial: Vec2, ease: Ease) -> Self {
        Self {
            current: initial,
            from: initial,
            target: initial,
            elapsed_sec: 0.0,
            duration_sec: 0.0,
            ease,
            active: false,
        }
    }

    /// Start easing from the current value toward `target`.
    pub fn to(&mut self, target: Vec2, duration_sec: f32) {
        self.from = self.current;
        self.target = target;
        self.elapsed_sec = 0.0;
        self.duration_sec = duration_sec;
        if duration_sec > 0.0 {
            self.active = true;
        } else {
            self.current = target;
            self.active = false;
        }
    }

    /// Advance by one frame and return the interpolated value.
    pub fn update(&mut self, dt_sec: f32) -> Vec2 {
        if !self.active {
            return self.current;
        }
        self.elapsed_sec += dt_sec.max(0.0);
        let t = self.elapsed_sec / self.duration_sec;
        if t >= 1.0 {
            self.current = self.target;
            self.active = false;
        } else {
            self.current = self.from.lerp(self.target, self.ease.apply(t));
        }
        self.current
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn duration_sec(&self) -> f32 {
        self.duration_sec
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Clamp a wall-clock frame gap before it is fed to tweens.
#[inline]
pub fn lag_smoothed_dt(dt_sec: f32) -> f32 {
    if dt_sec > LAG_THRESHOLD_SEC {
        LAG_STEP_SEC
    } else {
        dt_sec.max(0.0)
    }
}
