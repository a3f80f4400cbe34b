//! Compile-time tuning for storefront effects and cart timing.
//!
//! Nothing here is read from the environment: the client is a static bundle
//! and every knob is a constant or a field of [`EffectsConfig`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub use viewer::consts::MOBILE_BREAKPOINT_PX;

// ── Cart ────────────────────────────────────────────────────────

/// localStorage key holding the cart list.
pub const CART_STORAGE_KEY: &str = "cart";

/// In-page event fired on `window` after every cart write.
pub const CART_EVENT: &str = "cart-updated";

/// Delay between an add-to-cart press and its success/fail state.
pub const ADD_SETTLE_MS: u32 = 450;

/// Delay between the success/fail state and the return to idle.
pub const ADD_RESET_MS: u32 = 1500;

/// Toasts dismiss themselves after this long.
pub const TOAST_DISMISS_MS: u32 = 2500;

// ── Effects ─────────────────────────────────────────────────────

/// Default spotlight radius in CSS pixels.
pub const SPOTLIGHT_RADIUS_PX: f64 = 300.0;

/// Default glow colour as an `r, g, b` triple for `rgba()`.
pub const GLOW_COLOR: &str = "132, 0, 255";

/// Default particle pool size per card.
pub const PARTICLE_COUNT: usize = 12;

/// Feature toggles and sizes for the bento grid effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectsConfig {
    pub spotlight_radius: f64,
    pub glow_color: &'static str,
    pub particle_count: usize,
    pub enable_spotlight: bool,
    pub enable_particles: bool,
    pub enable_tilt: bool,
    pub enable_magnetism: bool,
    pub click_effect: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            spotlight_radius: SPOTLIGHT_RADIUS_PX,
            glow_color: GLOW_COLOR,
            particle_count: PARTICLE_COUNT,
            enable_spotlight: true,
            enable_particles: true,
            enable_tilt: true,
            enable_magnetism: true,
            click_effect: true,
        }
    }
}

impl EffectsConfig {
    /// Distance inside which a card glows at full intensity.
    #[must_use]
    pub fn proximity(&self) -> f64 {
        self.spotlight_radius * 0.5
    }

    /// Distance beyond which a card does not glow at all.
    #[must_use]
    pub fn fade_distance(&self) -> f64 {
        self.spotlight_radius * 0.75
    }

    /// This config with every animated effect switched off when the session
    /// has animations disabled.
    #[must_use]
    pub fn gated(self, animations_enabled: bool) -> Self {
        if animations_enabled {
            return self;
        }
        Self {
            enable_spotlight: false,
            enable_particles: false,
            enable_tilt: false,
            enable_magnetism: false,
            click_effect: false,
            ..self
        }
    }
}
