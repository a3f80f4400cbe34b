#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn looking_down_negative_z() -> Camera {
    Camera { position: Vec3::new(0.0, 0.0, 5.0), target: Vec3::ZERO, fov_deg: 90.0 }
}

// --- Projection ---

#[test]
fn target_projects_to_viewport_center() {
    let cam = looking_down_negative_z();
    let p = cam.project(Vec3::ZERO, 800.0, 600.0).expect("visible");
    assert!(approx_eq(p.x, 400.0));
    assert!(approx_eq(p.y, 300.0));
}

#[test]
fn point_right_of_target_projects_right() {
    let cam = looking_down_negative_z();
    let p = cam.project(Vec3::new(1.0, 0.0, 0.0), 800.0, 600.0).expect("visible");
    assert!(p.x > 400.0);
    assert!(approx_eq(p.y, 300.0));
}

#[test]
fn point_above_target_projects_up() {
    let cam = looking_down_negative_z();
    let p = cam.project(Vec3::new(0.0, 1.0, 0.0), 800.0, 600.0).expect("visible");
    assert!(p.y < 300.0);
}

#[test]
fn fov_90_maps_unit_height_at_unit_depth_to_half_viewport() {
    let cam = Camera { position: Vec3::ZERO, target: Vec3::new(0.0, 0.0, -1.0), fov_deg: 90.0 };
    let p = cam.project(Vec3::new(0.0, 1.0, -1.0), 800.0, 600.0).expect("visible");
    assert!(approx_eq(p.y, 0.0));
}

#[test]
fn point_behind_camera_is_not_projected() {
    let cam = looking_down_negative_z();
    assert!(cam.project(Vec3::new(0.0, 0.0, 10.0), 800.0, 600.0).is_none());
}

#[test]
fn segment_crossing_near_plane_is_clipped() {
    let cam = looking_down_negative_z();
    let seg = cam.project_segment(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 10.0), 800.0, 600.0);
    let (a, b) = seg.expect("partially visible");
    assert!(a.y.is_finite());
    assert!(b.y.is_finite());
}

#[test]
fn segment_fully_behind_camera_is_dropped() {
    let cam = looking_down_negative_z();
    assert!(cam.project_segment(Vec3::new(0.0, 0.0, 6.0), Vec3::new(1.0, 0.0, 9.0), 800.0, 600.0).is_none());
}

// --- Orbit / dolly ---

#[test]
fn orbit_preserves_distance() {
    let mut cam = Camera { position: Vec3::new(0.0, 2.0, 5.0), target: Vec3::ZERO, fov_deg: 45.0 };
    let before = cam.distance();
    cam.orbit(0.7, -0.2);
    assert!(approx_eq(cam.distance(), before));
}

#[test]
fn orbit_clamps_polar_above_floor() {
    let mut cam = Camera { position: Vec3::new(0.0, 1.0, 5.0), target: Vec3::ZERO, fov_deg: 45.0 };
    cam.orbit(0.0, 10.0);
    let polar = ((cam.position.y - cam.target.y) / cam.distance()).acos();
    assert!(polar <= MAX_POLAR + EPSILON);
    cam.orbit(0.0, -10.0);
    let polar = ((cam.position.y - cam.target.y) / cam.distance()).acos();
    assert!(polar >= MIN_POLAR - EPSILON);
}

#[test]
fn dolly_clamps_to_limits() {
    let mut cam = Camera { position: Vec3::new(0.0, 0.0, 5.0), target: Vec3::ZERO, fov_deg: 45.0 };
    cam.dolly(100.0);
    assert!(approx_eq(cam.distance(), MAX_DISTANCE));
    cam.dolly(0.0001);
    assert!(approx_eq(cam.distance(), MIN_DISTANCE));
}

#[test]
fn dolly_keeps_direction() {
    let mut cam = Camera { position: Vec3::new(0.0, 3.0, 4.0), target: Vec3::ZERO, fov_deg: 45.0 };
    cam.dolly(2.0);
    assert!(approx_eq(cam.position.x, 0.0));
    assert!(approx_eq(cam.position.y / cam.position.z, 0.75));
}

// --- Framing ---

#[test]
fn framing_targets_bounds_center() {
    let bounds = Bounds { min: Vec3::new(-2.0, 0.0, -1.0), max: Vec3::new(2.0, 1.4, 1.0) };
    let cam = Camera::framing(&bounds, 16.0 / 9.0);
    assert_eq!(cam.target, bounds.center());
    assert!(cam.distance() > bounds.radius());
    assert!(cam.position.y > cam.target.y);
}

#[test]
fn framing_keeps_bounds_corners_on_screen() {
    let bounds = Bounds { min: Vec3::new(-2.0, 0.0, -1.0), max: Vec3::new(2.0, 1.4, 1.0) };
    let (w, h) = (1200.0, 700.0);
    let cam = Camera::framing(&bounds, w / h);
    for x in [bounds.min.x, bounds.max.x] {
        for y in [bounds.min.y, bounds.max.y] {
            for z in [bounds.min.z, bounds.max.z] {
                let p = cam.project(Vec3::new(x, y, z), w, h).expect("corner visible");
                assert!((0.0..=w).contains(&p.x), "x out of view: {p:?}");
                assert!((0.0..=h).contains(&p.y), "y out of view: {p:?}");
            }
        }
    }
}

#[test]
fn framing_tolerates_degenerate_aspect() {
    let bounds = Bounds { min: Vec3::ZERO, max: Vec3::new(1.0, 1.0, 1.0) };
    let cam = Camera::framing(&bounds, 0.0);
    assert!(cam.position.x.is_finite());
}
