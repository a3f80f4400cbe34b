//! Orbit gesture state: pointer drag rotates around the target, wheel dollies.
//!
//! `OrbitInput` only tracks the active drag between pointer-down and
//! pointer-up and converts screen deltas into orbit deltas; applying them to
//! the camera is the engine's job.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::ScreenPoint;
use crate::consts::{DOLLY_STEP, ORBIT_RADIANS_PER_PX};

/// Orbit deltas in radians produced by a drag step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitDelta {
    pub azimuth: f64,
    pub polar: f64,
}

/// Tracks one drag gesture at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbitInput {
    last: Option<ScreenPoint>,
}

impl OrbitInput {
    /// Start a drag at `pt`. A second pointer-down replaces the anchor.
    pub fn begin(&mut self, pt: ScreenPoint) {
        self.last = Some(pt);
    }

    /// Advance the drag to `pt`, returning the orbit delta since the previous
    /// position. `None` when no drag is active.
    pub fn drag(&mut self, pt: ScreenPoint) -> Option<OrbitDelta> {
        let last = self.last?;
        self.last = Some(pt);
        Some(OrbitDelta {
            azimuth: -(pt.x - last.x) * ORBIT_RADIANS_PER_PX,
            polar: -(pt.y - last.y) * ORBIT_RADIANS_PER_PX,
        })
    }

    pub fn end(&mut self) {
        self.last = None;
    }
}

/// Distance multiplier for a wheel event. Positive `delta_y` (scroll down)
/// moves the camera away; one notch of 100 units is one [`DOLLY_STEP`].
#[must_use]
pub fn wheel_dolly_factor(delta_y: f64) -> f64 {
    if !delta_y.is_finite() {
        return 1.0;
    }
    DOLLY_STEP.powf(delta_y.clamp(-500.0, 500.0) / 100.0)
}
