//! Session animation gate and viewport helpers.
//!
//! Effects are turned off for the whole session when the user asks for
//! reduced motion or the viewport is phone-sized. SSR renders with effects
//! off; the hydrated client decides once at startup and again on resize.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use viewer::presets::DeviceClass;

use crate::config::MOBILE_BREAKPOINT_PX;

/// Width assumed when no browser is available.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;

/// Whether pointer effects should run.
#[must_use]
pub fn animations_enabled(prefers_reduced_motion: bool, viewport_width: f64) -> bool {
    !prefers_reduced_motion && viewport_width > MOBILE_BREAKPOINT_PX
}

/// `window.innerWidth` in CSS pixels.
pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_VIEWPORT_WIDTH
    }
}

/// `prefers-reduced-motion: reduce`.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Current gate decision for this browser.
pub fn detect_animations_enabled() -> bool {
    #[cfg(feature = "hydrate")]
    {
        animations_enabled(prefers_reduced_motion(), viewport_width())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Current device class for viewer presets.
pub fn detect_device() -> DeviceClass {
    DeviceClass::from_viewport_width(viewport_width())
}
