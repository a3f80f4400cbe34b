//! Stylesheet contract: timings and curves the Rust side relies on.
//!
//! Card effects are split between Rust (spawning, timers, cleanup) and CSS
//! (the animations themselves). These checks keep the two halves agreeing.

use client::util::particles::EXIT_MS;
use client::util::tilt::RIPPLE_MS;

const CSS: &str = include_str!("../style/storefront.css");

/// Body of the first top-level rule whose selector is exactly `selector`.
fn rule(selector: &str) -> String {
    let open = format!("\n{selector} {{");
    let Some(start) = CSS.find(&open) else {
        panic!("no rule for {selector}");
    };
    let body = &CSS[start + open.len()..];
    let end = body.find("\n}").unwrap_or(body.len());
    body[..end].split_whitespace().collect::<Vec<_>>().join(" ")
}

fn secs(ms: u32) -> String {
    format!("{}s", f64::from(ms) / 1000.0)
}

#[test]
fn particles_pop_in_with_back_out() {
    let body = rule(".particle");
    assert!(body.contains("particle-enter 0.3s cubic-bezier(0.34, 1.56, 0.64, 1)"), "{body}");
}

#[test]
fn particles_exit_with_back_in_for_exit_ms() {
    let body = rule(".particle--exit");
    let expected = format!("particle-exit {} cubic-bezier(0.36, 0, 0.66, -0.56)", secs(EXIT_MS));
    assert!(body.contains(&expected), "{body}");
}

#[test]
fn spotlight_follows_pointer_smoothly() {
    let body = rule(".spotlight");
    for property in ["left 0.1s", "top 0.1s", "opacity 0.3s"] {
        assert!(body.contains(property), "{property} missing from {body}");
    }
}

#[test]
fn ripple_ends_after_ripple_ms() {
    let body = rule(".ripple");
    assert!(body.contains(&format!("animation: ripple {}", secs(RIPPLE_MS))), "{body}");
}
