//! Shared numeric constants for the viewer crate.

// ── Camera ──────────────────────────────────────────────────────

/// Default vertical field of view in degrees.
pub const DEFAULT_FOV_DEG: f64 = 45.0;

/// Near clipping distance in world units (metres).
pub const NEAR_PLANE: f64 = 0.05;

/// Narrowest field of view a preset or tween may produce.
pub const MIN_FOV_DEG: f64 = 10.0;

/// Widest field of view a preset or tween may produce.
pub const MAX_FOV_DEG: f64 = 100.0;

/// Extra margin applied when framing the scene bounds on load.
pub const FRAME_MARGIN: f64 = 1.15;

// ── Transitions ─────────────────────────────────────────────────

/// Duration of a preset transition in milliseconds.
pub const PRESET_TRANSITION_MS: f64 = 1000.0;

// ── Orbit ───────────────────────────────────────────────────────

/// Radians of azimuth per CSS pixel of horizontal drag.
pub const ORBIT_RADIANS_PER_PX: f64 = 0.008;

/// Polar angle limits (radians from the +Y axis) so the camera never flips.
pub const MIN_POLAR: f64 = 0.15;
pub const MAX_POLAR: f64 = 1.52;

/// Dolly factor per wheel notch (100 delta units).
pub const DOLLY_STEP: f64 = 1.1;

/// Orbit distance limits in world units.
pub const MIN_DISTANCE: f64 = 1.2;
pub const MAX_DISTANCE: f64 = 18.0;

// ── Devices ─────────────────────────────────────────────────────

/// Viewport widths at or below this many CSS pixels use mobile presets.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
