#![allow(clippy::float_cmp)]

use super::*;

fn front() -> ViewPreset {
    ViewPreset::new(Vec3::new(0.0, 1.2, 5.0), Vec3::new(0.0, 0.6, 0.0))
}

#[test]
fn slugs_are_distinct_and_lowercase() {
    let slugs = PresetName::ALL.map(PresetName::slug);
    for (i, slug) in slugs.iter().enumerate() {
        assert_eq!(*slug, slug.to_lowercase());
        assert!(!slugs[i + 1..].contains(slug), "{slug}");
    }
}

#[test]
fn labels_are_title_case() {
    assert_eq!(PresetName::Interior.label(), "Interior");
    assert_eq!(PresetName::Full.label(), "Full");
}

#[test]
fn full_is_always_available_and_never_stored() {
    let set = PresetSet::default();
    assert!(set.is_available(PresetName::Full));
    assert!(set.get(PresetName::Full).is_none());
}

#[test]
fn missing_presets_are_unavailable() {
    let set = PresetSet { front: Some(front()), ..PresetSet::default() };
    assert!(set.is_available(PresetName::Front));
    assert!(!set.is_available(PresetName::Side));
    assert!(!set.is_available(PresetName::Back));
    assert!(!set.is_available(PresetName::Interior));
}

#[test]
fn to_camera_inherits_fov_when_absent() {
    let current = Camera { fov_deg: 38.0, ..Camera::default() };
    let cam = front().to_camera(&current);
    assert_eq!(cam.fov_deg, 38.0);
    assert_eq!(cam.position, front().position);
    assert_eq!(cam.target, front().target);
}

#[test]
fn to_camera_uses_stored_fov() {
    let current = Camera::default();
    let cam = front().with_fov(62.0).to_camera(&current);
    assert_eq!(cam.fov_deg, 62.0);
}

#[test]
fn device_class_breakpoint() {
    assert_eq!(DeviceClass::from_viewport_width(375.0), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport_width(768.0), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport_width(769.0), DeviceClass::Desktop);
}

#[test]
fn product_presets_select_by_device() {
    let presets = ProductPresets {
        desktop: PresetSet { front: Some(front()), ..PresetSet::default() },
        mobile: PresetSet::default(),
    };
    assert!(presets.for_device(DeviceClass::Desktop).front.is_some());
    assert!(presets.for_device(DeviceClass::Mobile).front.is_none());
}

#[test]
fn preset_name_serializes_lowercase() {
    let json = serde_json::to_string(&PresetName::Interior).expect("serialize");
    assert_eq!(json, "\"interior\"");
}
