//! Procedural showroom scene: a garage shell and a wireframe car.
//!
//! Mesh assets are not loaded; the scene is generated from the car's overall
//! dimensions so every product gets a recognisable silhouette with correct
//! proportions. The car's bounds drive the framing computed at load.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::math::{Bounds, Vec3};

/// Number of sides used to approximate a wheel.
const WHEEL_SIDES: usize = 12;

/// Number of floor grid lines per axis.
const FLOOR_LINES: usize = 11;

/// Overall car size in metres. Length runs along X, width along Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for CarDimensions {
    fn default() -> Self {
        Self { length: 4.7, width: 1.75, height: 1.4 }
    }
}

/// Stroke style bucket for a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Floor,
    Garage,
    Body,
    Glass,
    Wheel,
}

/// One line of the wireframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec3,
    pub b: Vec3,
    pub layer: Layer,
}

/// The full wireframe plus the bounds the camera frames on load.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub segments: Vec<Segment>,
    pub focus: Bounds,
}

impl Scene {
    /// Build the garage and car for a product of the given size.
    #[must_use]
    pub fn showroom(car: CarDimensions) -> Self {
        let car = sanitize(car);
        let mut segments = Vec::new();
        push_garage(&mut segments, car);
        let focus = push_car(&mut segments, car);
        Self { segments, focus }
    }

    /// Segments on a given layer.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |s| s.layer == layer)
    }
}

fn sanitize(car: CarDimensions) -> CarDimensions {
    let fallback = CarDimensions::default();
    let pick = |v: f64, d: f64| if v.is_finite() && v > 0.1 { v } else { d };
    CarDimensions {
        length: pick(car.length, fallback.length),
        width: pick(car.width, fallback.width),
        height: pick(car.height, fallback.height),
    }
}

fn push_box(out: &mut Vec<Segment>, min: Vec3, max: Vec3, layer: Layer) {
    let c = [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
    ];
    push_loop(out, &[c[0], c[1], c[2], c[3]], layer);
    push_loop(out, &[c[4], c[5], c[6], c[7]], layer);
    for i in 0..4 {
        out.push(Segment { a: c[i], b: c[i + 4], layer });
    }
}

fn push_loop(out: &mut Vec<Segment>, points: &[Vec3], layer: Layer) {
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        out.push(Segment { a, b, layer });
    }
}

#[allow(clippy::cast_precision_loss)]
fn push_garage(out: &mut Vec<Segment>, car: CarDimensions) {
    let half_x = car.length * 1.1;
    let half_z = car.width * 2.2;
    let height = car.height * 2.4;

    // Floor grid.
    for i in 0..FLOOR_LINES {
        let f = i as f64 / (FLOOR_LINES - 1) as f64;
        let x = -half_x + f * 2.0 * half_x;
        let z = -half_z + f * 2.0 * half_z;
        out.push(Segment { a: Vec3::new(x, 0.0, -half_z), b: Vec3::new(x, 0.0, half_z), layer: Layer::Floor });
        out.push(Segment { a: Vec3::new(-half_x, 0.0, z), b: Vec3::new(half_x, 0.0, z), layer: Layer::Floor });
    }

    // Back wall and side walls, open toward the viewer.
    let back = [
        Vec3::new(-half_x, 0.0, -half_z),
        Vec3::new(half_x, 0.0, -half_z),
        Vec3::new(half_x, height, -half_z),
        Vec3::new(-half_x, height, -half_z),
    ];
    push_loop(out, &back, Layer::Garage);
    for x in [-half_x, half_x] {
        out.push(Segment { a: Vec3::new(x, height, -half_z), b: Vec3::new(x, height, half_z), layer: Layer::Garage });
        out.push(Segment { a: Vec3::new(x, 0.0, half_z), b: Vec3::new(x, height, half_z), layer: Layer::Garage });
    }
}

/// Push the car wireframe and return its bounds.
fn push_car(out: &mut Vec<Segment>, car: CarDimensions) -> Bounds {
    let hl = car.length * 0.5;
    let hw = car.width * 0.5;
    let h = car.height;
    let wheel_r = h * 0.24;
    let sill = h * 0.18;
    let belt = h * 0.55;

    push_box(out, Vec3::new(-hl, sill, -hw), Vec3::new(hl, belt, hw), Layer::Body);

    // Cabin: a frustum with the roof pulled in from the pillars.
    let cw = hw * 0.86;
    let base = [
        Vec3::new(-car.length * 0.24, belt, -cw),
        Vec3::new(car.length * 0.2, belt, -cw),
        Vec3::new(car.length * 0.2, belt, cw),
        Vec3::new(-car.length * 0.24, belt, cw),
    ];
    let rw = cw * 0.92;
    let roof = [
        Vec3::new(-car.length * 0.16, h, -rw),
        Vec3::new(car.length * 0.07, h, -rw),
        Vec3::new(car.length * 0.07, h, rw),
        Vec3::new(-car.length * 0.16, h, rw),
    ];
    push_loop(out, &roof, Layer::Body);
    for i in 0..4 {
        out.push(Segment { a: base[i], b: roof[i], layer: Layer::Glass });
    }

    for x in [-car.length * 0.32, car.length * 0.32] {
        for z in [-hw, hw] {
            push_wheel(out, Vec3::new(x, wheel_r, z), wheel_r);
        }
    }

    Bounds { min: Vec3::new(-hl, 0.0, -hw), max: Vec3::new(hl, h, hw) }
}

fn push_wheel(out: &mut Vec<Segment>, center: Vec3, radius: f64) {
    #[allow(clippy::cast_precision_loss)]
    let rim = (0..WHEEL_SIDES)
        .map(|i| {
            let angle = TAU * i as f64 / WHEEL_SIDES as f64;
            Vec3::new(center.x + radius * angle.cos(), center.y + radius * angle.sin(), center.z)
        })
        .collect::<Vec<_>>();
    push_loop(out, &rim, Layer::Wheel);
}
