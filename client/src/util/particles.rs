//! Particle pool and spawn plan for hovered cards.
//!
//! Randomness is injected as a `FnMut() -> f64` yielding values in `[0, 1)`
//! so plans are reproducible in tests; the browser passes `Math.random`.
//! Animation itself is CSS: each particle element carries its drift as
//! custom properties and the stylesheet runs the enter, drift and pulse
//! keyframes.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

/// Delay between consecutive particle spawns.
pub const STAGGER_MS: u32 = 100;

/// Exit animation length; the stylesheet runs `particle-exit` for as long.
pub const EXIT_MS: u32 = 300;

/// Maximum drift in either axis.
pub const DRIFT_RANGE_PX: f64 = 50.0;

/// Drift period bounds in seconds.
pub const DRIFT_MIN_SECS: f64 = 2.0;
pub const DRIFT_MAX_SECS: f64 = 4.0;

/// Where a particle starts inside the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSeed {
    pub x: f64,
    pub y: f64,
}

/// Per-particle drift animation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drift {
    pub dx: f64,
    pub dy: f64,
    pub rotate_deg: f64,
    pub secs: f64,
}

impl Drift {
    pub fn random(rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            dx: (unit(rng) * 2.0 - 1.0) * DRIFT_RANGE_PX,
            dy: (unit(rng) * 2.0 - 1.0) * DRIFT_RANGE_PX,
            rotate_deg: unit(rng) * 360.0,
            secs: DRIFT_MIN_SECS + unit(rng) * (DRIFT_MAX_SECS - DRIFT_MIN_SECS),
        }
    }
}

fn unit(rng: &mut impl FnMut() -> f64) -> f64 {
    let v = rng();
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.5 }
}

/// Inline style for a particle element.
#[must_use]
pub fn particle_style(seed: ParticleSeed, drift: Drift) -> String {
    format!(
        "left:{:.1}px;top:{:.1}px;--drift-x:{:.1}px;--drift-y:{:.1}px;--drift-rot:{:.1}deg;--drift-secs:{:.2}s",
        seed.x, seed.y, drift.dx, drift.dy, drift.rotate_deg, drift.secs
    )
}

/// Spawn delay for the `index`-th particle.
#[must_use]
pub fn spawn_delay_ms(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(STAGGER_MS)
}

/// Seed positions for one card, built on first hover from its layout size
/// and reused for the life of the card.
#[derive(Clone, Debug, Default)]
pub struct ParticlePool {
    seeds: Vec<ParticleSeed>,
}

impl ParticlePool {
    /// Seeds for a `width × height` card. The pool is only rebuilt when the
    /// requested count changes; later sizes are ignored so hover transforms
    /// never reshuffle it.
    pub fn ensure(&mut self, count: usize, width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> &[ParticleSeed] {
        if self.seeds.len() != count {
            let (w, h) = (width.max(0.0), height.max(0.0));
            self.seeds = (0..count).map(|_| ParticleSeed { x: unit(rng) * w, y: unit(rng) * h }).collect();
        }
        &self.seeds
    }
}
