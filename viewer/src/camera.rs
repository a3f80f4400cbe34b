#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{
    DEFAULT_FOV_DEG, FRAME_MARGIN, MAX_DISTANCE, MAX_FOV_DEG, MAX_POLAR, MIN_DISTANCE, MIN_FOV_DEG, MIN_POLAR,
    NEAR_PLANE,
};
use crate::math::{Bounds, Vec3};

/// A point in screen space (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Perspective look-at camera orbiting a target point.
///
/// `fov_deg` is the vertical field of view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { position: Vec3::new(0.0, 1.5, 6.0), target: Vec3::ZERO, fov_deg: DEFAULT_FOV_DEG }
    }
}

/// Orthonormal camera basis: right, up, forward.
#[derive(Debug, Clone, Copy)]
struct Basis {
    right: Vec3,
    up: Vec3,
    forward: Vec3,
}

impl Camera {
    /// Frame `bounds` so the whole bounding sphere is visible at `aspect`
    /// (width / height), looking from the front-right and slightly above.
    #[must_use]
    pub fn framing(bounds: &Bounds, aspect: f64) -> Self {
        let fov_deg = DEFAULT_FOV_DEG;
        let half_v = (fov_deg * 0.5).to_radians();
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        let half_h = (half_v.tan() * aspect).atan();
        let half = half_v.min(half_h);
        let distance = (bounds.radius() / half.sin() * FRAME_MARGIN).clamp(MIN_DISTANCE, MAX_DISTANCE);

        let direction = Vec3::new(1.0, 0.45, 1.4).normalized().unwrap_or(Vec3::new(0.0, 0.0, 1.0));
        let target = bounds.center();
        Self { position: target + direction * distance, target, fov_deg }
    }

    /// Distance from the camera to its orbit target.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.position.distance(self.target)
    }

    fn basis(&self) -> Basis {
        let forward = (self.target - self.position).normalized().unwrap_or(Vec3::new(0.0, 0.0, -1.0));
        let right = forward.cross(Vec3::UP).normalized().unwrap_or(Vec3::new(1.0, 0.0, 0.0));
        let up = right.cross(forward);
        Basis { right, up, forward }
    }

    /// Transform a world point into view space: +x right, +y up, +z depth in
    /// front of the camera.
    #[must_use]
    pub fn to_view(&self, world: Vec3) -> Vec3 {
        let b = self.basis();
        let d = world - self.position;
        Vec3::new(d.dot(b.right), d.dot(b.up), d.dot(b.forward))
    }

    fn focal_px(&self, viewport_h: f64) -> f64 {
        let half = (self.fov_deg.clamp(MIN_FOV_DEG, MAX_FOV_DEG) * 0.5).to_radians();
        (viewport_h * 0.5) / half.tan()
    }

    fn view_to_screen(&self, view: Vec3, viewport_w: f64, viewport_h: f64) -> ScreenPoint {
        let focal = self.focal_px(viewport_h);
        ScreenPoint {
            x: viewport_w * 0.5 + view.x * focal / view.z,
            y: viewport_h * 0.5 - view.y * focal / view.z,
        }
    }

    /// Project a world point to screen space. `None` when the point is behind
    /// the near plane.
    #[must_use]
    pub fn project(&self, world: Vec3, viewport_w: f64, viewport_h: f64) -> Option<ScreenPoint> {
        let view = self.to_view(world);
        if view.z < NEAR_PLANE {
            return None;
        }
        Some(self.view_to_screen(view, viewport_w, viewport_h))
    }

    /// Project a world segment, clipping it against the near plane.
    #[must_use]
    pub fn project_segment(
        &self,
        a: Vec3,
        b: Vec3,
        viewport_w: f64,
        viewport_h: f64,
    ) -> Option<(ScreenPoint, ScreenPoint)> {
        let mut va = self.to_view(a);
        let mut vb = self.to_view(b);
        if va.z < NEAR_PLANE && vb.z < NEAR_PLANE {
            return None;
        }
        if va.z < NEAR_PLANE {
            let t = (NEAR_PLANE - va.z) / (vb.z - va.z);
            va = va.lerp(vb, t);
        } else if vb.z < NEAR_PLANE {
            let t = (NEAR_PLANE - vb.z) / (va.z - vb.z);
            vb = vb.lerp(va, t);
        }
        Some((self.view_to_screen(va, viewport_w, viewport_h), self.view_to_screen(vb, viewport_w, viewport_h)))
    }

    /// Rotate the camera around its target by azimuth / polar deltas (radians).
    /// The polar angle is clamped so the camera stays above the floor and
    /// never passes over the pole.
    pub fn orbit(&mut self, d_azimuth: f64, d_polar: f64) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= f64::EPSILON {
            return;
        }
        let azimuth = offset.x.atan2(offset.z) + d_azimuth;
        let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() + d_polar).clamp(MIN_POLAR, MAX_POLAR);
        self.position = self.target + spherical(radius, azimuth, polar);
    }

    /// Scale the orbit distance by `factor`, clamped to the dolly limits.
    pub fn dolly(&mut self, factor: f64) {
        let offset = self.position - self.target;
        let radius = offset.length();
        let Some(direction) = offset.normalized() else {
            return;
        };
        let next = (radius * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.position = self.target + direction * next;
    }
}

fn spherical(radius: f64, azimuth: f64, polar: f64) -> Vec3 {
    Vec3::new(
        radius * polar.sin() * azimuth.sin(),
        radius * polar.cos(),
        radius * polar.sin() * azimuth.cos(),
    )
}
