#![allow(clippy::float_cmp)]

use super::*;

fn card() -> CardRect {
    CardRect { left: 100.0, top: 100.0, width: 200.0, height: 100.0 }
}

#[test]
fn pointer_at_center_is_full_intensity() {
    let rect = card();
    let (cx, cy) = rect.center();
    assert_eq!(rect.effective_distance(cx, cy), 0.0);
    assert_eq!(glow_intensity(rect.effective_distance(cx, cy), 150.0, 225.0), 1.0);
}

#[test]
fn effective_distance_subtracts_half_larger_side() {
    let rect = card();
    // Centre is (200, 150); 300 px to the right is 300 - 100.
    assert_eq!(rect.effective_distance(500.0, 150.0), 200.0);
}

#[test]
fn intensity_thresholds() {
    assert_eq!(glow_intensity(150.0, 150.0, 225.0), 1.0);
    assert_eq!(glow_intensity(225.0, 150.0, 225.0), 0.0);
    assert_eq!(glow_intensity(1000.0, 150.0, 225.0), 0.0);
    assert!((glow_intensity(187.5, 150.0, 225.0) - 0.5).abs() < 1e-12);
}

#[test]
fn intensity_strictly_decreases_between_thresholds() {
    let mut prev = glow_intensity(150.0, 150.0, 225.0);
    for step in 1..75 {
        let d = 150.0 + f64::from(step);
        let next = glow_intensity(d, 150.0, 225.0);
        assert!(next < prev, "not decreasing at {d}");
        prev = next;
    }
}

#[test]
fn relative_percent_of_card_box() {
    let rect = card();
    assert_eq!(rect.relative_percent(200.0, 150.0), (50.0, 50.0));
    assert_eq!(rect.relative_percent(100.0, 200.0), (0.0, 100.0));
}

#[test]
fn compute_lights_near_cards_only() {
    let cfg = EffectsConfig::default();
    let near = card();
    let far = CardRect { left: 2000.0, top: 100.0, width: 200.0, height: 100.0 };
    let frame = compute(&[near, far], 200.0, 150.0, &cfg);
    assert_eq!(frame.cards[0].intensity, 1.0);
    assert_eq!(frame.cards[1].intensity, 0.0);
    assert_eq!(frame.glow_opacity, MAX_SPOTLIGHT_OPACITY);
}

#[test]
fn glow_opacity_fades_with_nearest_card() {
    let cfg = EffectsConfig::default();
    // 287.5 px from centre is 187.5 effective: halfway through the fade.
    let frame = compute(&[card()], 200.0 + 287.5, 150.0, &cfg);
    assert!((frame.glow_opacity - 0.4).abs() < 1e-12);
    let frame = compute(&[card()], 2000.0, 150.0, &cfg);
    assert_eq!(frame.glow_opacity, 0.0);
}

#[test]
fn disabled_spotlight_is_inactive() {
    let cfg = EffectsConfig::default().gated(false);
    let frame = compute(&[card()], 200.0, 150.0, &cfg);
    assert_eq!(frame, SpotlightFrame::inactive(1));
}

#[test]
fn no_cards_means_no_glow() {
    let frame = compute(&[], 0.0, 0.0, &EffectsConfig::default());
    assert!(frame.cards.is_empty());
    assert_eq!(frame.glow_opacity, 0.0);
}
