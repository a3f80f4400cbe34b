//! Pointer-relative card transforms: tilt, magnetism and the click ripple.
//!
//! All coordinates are relative to the card's top-left corner in CSS pixels.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

/// Maximum tilt in degrees at the card edge.
pub const TILT_MAX_DEG: f64 = 10.0;

/// Fraction of the pointer offset applied as translation.
pub const MAGNETISM_STRENGTH: f64 = 0.05;

/// CSS perspective applied with the tilt.
pub const PERSPECTIVE_PX: f64 = 1000.0;

/// Ripple expand/fade duration.
pub const RIPPLE_MS: u32 = 800;

/// Card transform for one pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTransform {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl CardTransform {
    /// The `transform` property value. The identity transform still carries
    /// the perspective so the reset animates smoothly.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "perspective({PERSPECTIVE_PX}px) rotateX({:.3}deg) rotateY({:.3}deg) translate({:.3}px, {:.3}px)",
            self.rotate_x_deg, self.rotate_y_deg, self.translate_x, self.translate_y
        )
    }
}

/// Tilt and/or magnetism for a pointer at `(x, y)` on a `width × height` card.
/// Disabled parts stay at zero.
#[must_use]
pub fn card_transform(width: f64, height: f64, x: f64, y: f64, tilt: bool, magnetism: bool) -> CardTransform {
    let cx = width / 2.0;
    let cy = height / 2.0;
    if cx <= 0.0 || cy <= 0.0 {
        return CardTransform::default();
    }
    let mut out = CardTransform::default();
    if tilt {
        out.rotate_x_deg = (y - cy) / cy * -TILT_MAX_DEG;
        out.rotate_y_deg = (x - cx) / cx * TILT_MAX_DEG;
    }
    if magnetism {
        out.translate_x = (x - cx) * MAGNETISM_STRENGTH;
        out.translate_y = (y - cy) * MAGNETISM_STRENGTH;
    }
    out
}

/// Geometry of a click ripple: a circle centred on the click large enough to
/// cover the farthest corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub radius: f64,
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

#[must_use]
pub fn ripple(width: f64, height: f64, x: f64, y: f64) -> Ripple {
    let radius = [(0.0, 0.0), (width, 0.0), (0.0, height), (width, height)]
        .into_iter()
        .map(|(cx, cy)| (x - cx).hypot(y - cy))
        .fold(0.0_f64, f64::max);
    Ripple { radius, left: x - radius, top: y - radius, size: radius * 2.0 }
}
