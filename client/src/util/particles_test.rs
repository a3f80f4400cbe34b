#![allow(clippy::float_cmp)]

use super::*;

fn cycle(values: &'static [f64]) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

#[test]
fn pool_is_lazy_and_sized_to_card() {
    let mut pool = ParticlePool::default();
    let mut rng = cycle(&[0.0, 0.5, 1.0]);
    let seeds = pool.ensure(12, 200.0, 100.0, &mut rng).to_vec();
    assert_eq!(seeds.len(), 12);
    for s in &seeds {
        assert!((0.0..=200.0).contains(&s.x));
        assert!((0.0..=100.0).contains(&s.y));
    }
}

#[test]
fn pool_is_reused_for_same_size() {
    let mut pool = ParticlePool::default();
    let first = pool.ensure(4, 200.0, 100.0, &mut cycle(&[0.1, 0.2])).to_vec();
    let second = pool.ensure(4, 200.0, 100.0, &mut cycle(&[0.9])).to_vec();
    assert_eq!(first, second);
}

#[test]
fn pool_survives_a_scaled_card() {
    // A hovered card reports a larger box while its transform runs.
    let mut pool = ParticlePool::default();
    let first = pool.ensure(4, 200.0, 100.0, &mut cycle(&[0.5])).to_vec();
    let scaled = pool.ensure(4, 206.0, 103.0, &mut cycle(&[0.9])).to_vec();
    assert_eq!(first, scaled);
    assert_eq!(first[0], ParticleSeed { x: 100.0, y: 50.0 });
}

#[test]
fn pool_rebuilds_when_count_changes() {
    let mut pool = ParticlePool::default();
    pool.ensure(4, 200.0, 100.0, &mut cycle(&[0.5]));
    let seeds = pool.ensure(6, 400.0, 100.0, &mut cycle(&[0.5])).to_vec();
    assert_eq!(seeds.len(), 6);
    assert_eq!(seeds[0], ParticleSeed { x: 200.0, y: 50.0 });
}

#[test]
fn stagger_is_index_times_hundred() {
    assert_eq!(spawn_delay_ms(0), 0);
    assert_eq!(spawn_delay_ms(3), 300);
    assert_eq!(spawn_delay_ms(11), 1100);
}

#[test]
fn drift_bounds() {
    let low = Drift::random(&mut cycle(&[0.0]));
    assert_eq!(low.dx, -DRIFT_RANGE_PX);
    assert_eq!(low.rotate_deg, 0.0);
    assert_eq!(low.secs, DRIFT_MIN_SECS);
    let high = Drift::random(&mut cycle(&[1.0]));
    assert_eq!(high.dy, DRIFT_RANGE_PX);
    assert_eq!(high.secs, DRIFT_MAX_SECS);
}

#[test]
fn bad_random_values_are_tamed() {
    let d = Drift::random(&mut cycle(&[f64::NAN, 7.0]));
    assert_eq!(d.dx, 0.0);
    assert_eq!(d.dy, DRIFT_RANGE_PX);
}

#[test]
fn style_carries_custom_properties() {
    let style = particle_style(
        ParticleSeed { x: 10.0, y: 20.0 },
        Drift { dx: -5.0, dy: 4.0, rotate_deg: 90.0, secs: 2.5 },
    );
    assert_eq!(style, "left:10.0px;top:20.0px;--drift-x:-5.0px;--drift-y:4.0px;--drift-rot:90.0deg;--drift-secs:2.50s");
}
