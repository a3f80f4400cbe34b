//! Small browser helpers shared by the hydrated components.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::util::spotlight::CardRect;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// `performance.now()`-style frame clock; falls back to the wall clock.
pub fn frame_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(now_ms, |p| p.now())
}

/// Uniform value in `[0, 1)`.
pub fn random() -> f64 {
    js_sys::Math::random()
}

/// Bounding box of `el` in viewport coordinates.
pub fn rect_of(el: &Element) -> CardRect {
    let r = el.get_bounding_client_rect();
    CardRect { left: r.left(), top: r.top(), width: r.width(), height: r.height() }
}

/// Set one inline style property (custom properties included).
pub fn set_style(el: &Element, name: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(name, value);
    }
}
