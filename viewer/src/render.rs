//! Rendering: draws the wireframe scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the scene and camera and produces pixels; it never mutates state.
//! Fallible `Canvas2D` calls propagate as `Result<(), JsValue>` and the
//! caller ([`crate::engine::Engine::render`]) converts them.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Camera;
use crate::scene::{Layer, Scene};

/// Canvas clear colour, matching the configurator panel background.
const BACKGROUND: &str = "#0b0b10";

/// Back-to-front draw order.
const DRAW_ORDER: [Layer; 5] = [Layer::Floor, Layer::Garage, Layer::Wheel, Layer::Body, Layer::Glass];

fn stroke_for(layer: Layer) -> (&'static str, f64) {
    match layer {
        Layer::Floor => ("rgba(255, 255, 255, 0.08)", 1.0),
        Layer::Garage => ("rgba(132, 0, 255, 0.35)", 1.0),
        Layer::Body => ("rgba(235, 235, 245, 0.92)", 1.6),
        Layer::Glass => ("rgba(150, 190, 255, 0.75)", 1.2),
        Layer::Wheel => ("rgba(200, 200, 210, 0.85)", 1.4),
    }
}

/// Draw the full frame.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);
    if viewport_w <= 0.0 || viewport_h <= 0.0 {
        return Ok(());
    }

    ctx.set_line_cap("round");
    for layer in DRAW_ORDER {
        draw_layer(ctx, scene, camera, layer, viewport_w, viewport_h);
    }
    Ok(())
}

fn draw_layer(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    camera: &Camera,
    layer: Layer,
    viewport_w: f64,
    viewport_h: f64,
) {
    let (color, width) = stroke_for(layer);
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    ctx.begin_path();
    for seg in scene.layer(layer) {
        if let Some((a, b)) = camera.project_segment(seg.a, seg.b, viewport_w, viewport_h) {
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
        }
    }
    ctx.stroke();
}
