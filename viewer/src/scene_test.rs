#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn showroom_focus_matches_car_dimensions() {
    let car = CarDimensions { length: 4.5, width: 1.7, height: 1.3 };
    let scene = Scene::showroom(car);
    assert_eq!(scene.focus.min, Vec3::new(-2.25, 0.0, -0.85));
    assert_eq!(scene.focus.max, Vec3::new(2.25, 1.3, 0.85));
}

#[test]
fn showroom_has_every_layer() {
    let scene = Scene::showroom(CarDimensions::default());
    for layer in [Layer::Floor, Layer::Garage, Layer::Body, Layer::Glass, Layer::Wheel] {
        assert!(scene.layer(layer).next().is_some(), "missing layer {layer:?}");
    }
}

#[test]
fn four_wheels_of_twelve_sides() {
    let scene = Scene::showroom(CarDimensions::default());
    assert_eq!(scene.layer(Layer::Wheel).count(), 4 * WHEEL_SIDES);
}

#[test]
fn car_segments_stay_inside_focus_bounds() {
    let scene = Scene::showroom(CarDimensions::default());
    let f = scene.focus;
    let eps = 1e-9;
    for seg in scene.layer(Layer::Body).chain(scene.layer(Layer::Glass)) {
        for p in [seg.a, seg.b] {
            assert!(p.x >= f.min.x - eps && p.x <= f.max.x + eps);
            assert!(p.y >= f.min.y - eps && p.y <= f.max.y + eps);
            assert!(p.z >= f.min.z - eps && p.z <= f.max.z + eps);
        }
    }
}

#[test]
fn nonsense_dimensions_fall_back_to_default() {
    let scene = Scene::showroom(CarDimensions { length: f64::NAN, width: -1.0, height: 0.0 });
    let d = CarDimensions::default();
    assert_eq!(scene.focus.max, Vec3::new(d.length * 0.5, d.height, d.width * 0.5));
}

#[test]
fn garage_encloses_car() {
    let scene = Scene::showroom(CarDimensions::default());
    let garage = Bounds::from_points(scene.layer(Layer::Garage).flat_map(|s| [s.a, s.b])).expect("garage");
    assert!(garage.min.x < scene.focus.min.x);
    assert!(garage.max.x > scene.focus.max.x);
    assert!(garage.max.y > scene.focus.max.y);
}
