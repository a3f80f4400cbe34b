//! Local UI chrome state (animation gate, device class).
//!
//! DESIGN
//! ======
//! Keeps session-wide presentation switches out of the cart and catalog so
//! effects can be gated in one place.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use viewer::presets::DeviceClass;

/// Session-wide presentation switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Pointer effects run only when this is set. Off during SSR.
    pub animations_enabled: bool,
    /// Preset set used by the viewer.
    pub device: DeviceClass,
}

impl UiState {
    /// Apply a fresh measurement. Returns `true` when anything changed.
    pub fn observe(&mut self, animations_enabled: bool, device: DeviceClass) -> bool {
        let next = Self { animations_enabled, device };
        if *self == next {
            return false;
        }
        *self = next;
        true
    }
}
