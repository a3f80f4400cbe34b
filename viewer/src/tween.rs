//! Timed camera transitions between presets.
//!
//! A [`CameraTween`] captures the camera at the moment a preset is requested
//! and interpolates position, orbit target and field of view toward the
//! destination pose. The host samples it once per animation frame with the
//! frame timestamp; the tween reports completion once the eased parameter
//! reaches 1, at which point the sampled camera equals the destination exactly.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

use crate::camera::Camera;
use crate::consts::{MAX_FOV_DEG, MIN_FOV_DEG};

/// Ease-in-out cubic: slow start, fast middle, slow finish. Input is clamped
/// to `[0, 1]`; `f(0) = 0`, `f(1) = 1`.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One sampled frame of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenFrame {
    pub camera: Camera,
    pub done: bool,
}

/// An in-flight interpolation from one camera to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTween {
    from: Camera,
    to: Camera,
    start_ms: f64,
    duration_ms: f64,
}

impl CameraTween {
    #[must_use]
    pub fn new(from: Camera, to: Camera, start_ms: f64, duration_ms: f64) -> Self {
        let to = Camera { fov_deg: to.fov_deg.clamp(MIN_FOV_DEG, MAX_FOV_DEG), ..to };
        Self { from, to, start_ms, duration_ms: duration_ms.max(0.0) }
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Sample the camera at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> TweenFrame {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return TweenFrame { camera: self.to, done: true };
        }
        let eased = ease_in_out_cubic(t);
        let camera = Camera {
            position: self.from.position.lerp(self.to.position, eased),
            target: self.from.target.lerp(self.to.target, eased),
            fov_deg: self.from.fov_deg + (self.to.fov_deg - self.from.fov_deg) * eased,
        };
        TweenFrame { camera, done: false }
    }
}
