use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, ScreenPoint};
use crate::consts::PRESET_TRANSITION_MS;
use crate::input::{OrbitInput, wheel_dolly_factor};
use crate::presets::{DeviceClass, PresetName, PresetSet, ProductPresets};
use crate::render;
use crate::scene::Scene;
use crate::tween::CameraTween;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Errors surfaced to the host.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("preset {0:?} is not defined for this product")]
    PresetUnavailable(PresetName),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("canvas call failed: {0}")]
    Canvas(String),
}

impl From<JsValue> for ViewerError {
    fn from(value: JsValue) -> Self {
        Self::Canvas(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Engine state that does not need the canvas element.
///
/// Separated from [`Engine`] so it can be tested natively.
pub struct EngineCore {
    pub scene: Scene,
    pub camera: Camera,
    presets: ProductPresets,
    device: DeviceClass,
    initial: Camera,
    framed: bool,
    tween: Option<CameraTween>,
    orbit: OrbitInput,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new(scene: Scene, presets: ProductPresets) -> Self {
        let initial = Camera::framing(&scene.focus, 1.0);
        Self {
            scene,
            camera: initial,
            presets,
            device: DeviceClass::default(),
            initial,
            framed: false,
            tween: None,
            orbit: OrbitInput::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    // --- Viewport ---

    /// Record the canvas size in CSS pixels. The first non-empty viewport
    /// fixes the load framing, which is also what [`PresetName::Full`]
    /// returns to. Width also selects the device class for presets.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.device = DeviceClass::from_viewport_width(self.viewport_width);
        if !self.framed && self.viewport_width > 0.0 && self.viewport_height > 0.0 {
            self.initial = Camera::framing(&self.scene.focus, self.viewport_width / self.viewport_height);
            self.camera = self.initial;
            self.framed = true;
        }
    }

    #[must_use]
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Override the device class, e.g. from the window width when the
    /// canvas is narrower than the page.
    pub fn set_device(&mut self, device: DeviceClass) {
        self.device = device;
    }

    /// Presets for the current device class.
    #[must_use]
    pub fn presets(&self) -> &PresetSet {
        self.presets.for_device(self.device)
    }

    // --- Presets ---

    /// Start a transition to `name` from wherever the camera is now. A
    /// transition already in flight is replaced.
    ///
    /// # Errors
    ///
    /// [`ViewerError::PresetUnavailable`] when the product defines no such
    /// preset for the current device class; the camera is left untouched.
    pub fn go_to(&mut self, name: PresetName, now_ms: f64) -> Result<(), ViewerError> {
        let destination = match name {
            PresetName::Full => self.initial,
            _ => self
                .presets()
                .get(name)
                .map(|preset| preset.to_camera(&self.camera))
                .ok_or(ViewerError::PresetUnavailable(name))?,
        };
        self.tween = Some(CameraTween::new(self.camera, destination, now_ms, PRESET_TRANSITION_MS));
        Ok(())
    }

    /// Advance any active transition. Returns `true` when the camera moved
    /// and a redraw is needed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        let frame = tween.sample(now_ms);
        self.camera = frame.camera;
        if frame.done {
            self.tween = None;
        }
        true
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    // --- Input ---

    /// Begin an orbit drag. User input always wins over a running transition.
    pub fn on_pointer_down(&mut self, pt: ScreenPoint) {
        self.tween = None;
        self.orbit.begin(pt);
    }

    /// Returns `true` when the camera moved.
    pub fn on_pointer_move(&mut self, pt: ScreenPoint) -> bool {
        match self.orbit.drag(pt) {
            Some(delta) => {
                self.camera.orbit(delta.azimuth, delta.polar);
                true
            }
            None => false,
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.orbit.end();
    }

    /// Dolly toward or away from the target. Returns `true` when the camera
    /// moved.
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        let factor = wheel_dolly_factor(delta_y);
        if (factor - 1.0).abs() <= f64::EPSILON {
            return false;
        }
        self.tween = None;
        self.camera.dolly(factor);
        true
    }

    // --- Queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }
}

/// The full viewer. Wraps [`EngineCore`] and owns the canvas and its context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Bind a viewer to `canvas`.
    ///
    /// # Errors
    ///
    /// Fails when the canvas cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, scene: Scene, presets: ProductPresets) -> Result<Self, ViewerError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(ViewerError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ViewerError::NoContext)?;
        Ok(Self { canvas, ctx, core: EngineCore::new(scene, presets) })
    }

    /// Resize the backing store to the CSS size times the pixel ratio.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let dpr = self.core.dpr;
        self.canvas.set_width((self.core.viewport_width * dpr).round() as u32);
        self.canvas.set_height((self.core.viewport_height * dpr).round() as u32);
    }

    /// Draw the current frame.
    ///
    /// # Errors
    ///
    /// Propagates any failing `Canvas2D` call.
    pub fn render(&self) -> Result<(), ViewerError> {
        render::draw(
            &self.ctx,
            &self.core.scene,
            &self.core.camera,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )?;
        Ok(())
    }

    // --- Delegated ---

    /// See [`EngineCore::go_to`].
    ///
    /// # Errors
    ///
    /// [`ViewerError::PresetUnavailable`] for presets the product lacks.
    pub fn go_to(&mut self, name: PresetName, now_ms: f64) -> Result<(), ViewerError> {
        self.core.go_to(name, now_ms)
    }

    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.core.tick(now_ms)
    }

    pub fn on_pointer_down(&mut self, pt: ScreenPoint) {
        self.core.on_pointer_down(pt);
    }

    pub fn on_pointer_move(&mut self, pt: ScreenPoint) -> bool {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        self.core.on_wheel(delta_y)
    }
}
