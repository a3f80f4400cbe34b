//! Named camera presets for the configurator.
//!
//! Each product carries one [`PresetSet`] per [`DeviceClass`]. A set may omit
//! any named view; the host disables the matching button. [`PresetName::Full`]
//! never has stored data: it always resolves to the view framed at load.

#[cfg(test)]
#[path = "presets_test.rs"]
mod presets_test;

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::consts::{DEFAULT_FOV_DEG, MOBILE_BREAKPOINT_PX};
use crate::math::Vec3;

/// The named views offered by the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetName {
    Front,
    Side,
    Back,
    Interior,
    Full,
}

impl PresetName {
    /// All presets in toolbar order.
    pub const ALL: [Self; 5] = [Self::Front, Self::Side, Self::Back, Self::Interior, Self::Full];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Side => "Side",
            Self::Back => "Back",
            Self::Interior => "Interior",
            Self::Full => "Full",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Side => "side",
            Self::Back => "back",
            Self::Interior => "interior",
            Self::Full => "full",
        }
    }
}

/// A stored camera pose. `fov_deg = None` keeps the current field of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPreset {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_deg: Option<f64>,
}

impl ViewPreset {
    #[must_use]
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target, fov_deg: None }
    }

    #[must_use]
    pub const fn with_fov(mut self, fov_deg: f64) -> Self {
        self.fov_deg = Some(fov_deg);
        self
    }

    /// Resolve into a full camera, inheriting the field of view from `current`
    /// when the preset does not carry one.
    #[must_use]
    pub fn to_camera(&self, current: &Camera) -> Camera {
        Camera {
            position: self.position,
            target: self.target,
            fov_deg: self.fov_deg.unwrap_or(if current.fov_deg > 0.0 { current.fov_deg } else { DEFAULT_FOV_DEG }),
        }
    }
}

/// Stored presets for one device class.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PresetSet {
    pub front: Option<ViewPreset>,
    pub side: Option<ViewPreset>,
    pub back: Option<ViewPreset>,
    pub interior: Option<ViewPreset>,
}

impl PresetSet {
    /// Stored data for `name`. Always `None` for [`PresetName::Full`].
    #[must_use]
    pub fn get(&self, name: PresetName) -> Option<&ViewPreset> {
        match name {
            PresetName::Front => self.front.as_ref(),
            PresetName::Side => self.side.as_ref(),
            PresetName::Back => self.back.as_ref(),
            PresetName::Interior => self.interior.as_ref(),
            PresetName::Full => None,
        }
    }

    /// Whether the toolbar button for `name` should be enabled.
    #[must_use]
    pub fn is_available(&self, name: PresetName) -> bool {
        name == PresetName::Full || self.get(name).is_some()
    }
}

/// Layout class used to pick presets (phones get wider, closer framings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    #[must_use]
    pub fn from_viewport_width(width_css: f64) -> Self {
        if width_css <= MOBILE_BREAKPOINT_PX { Self::Mobile } else { Self::Desktop }
    }
}

/// Presets for both device classes of one product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductPresets {
    pub desktop: PresetSet,
    pub mobile: PresetSet,
}

impl ProductPresets {
    #[must_use]
    pub fn for_device(&self, device: DeviceClass) -> &PresetSet {
        match device {
            DeviceClass::Desktop => &self.desktop,
            DeviceClass::Mobile => &self.mobile,
        }
    }
}
