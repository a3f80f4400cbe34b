//! 3D product viewer for the showroom storefront.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! camera for the product configurator: framing the scene on load, animating
//! between named camera presets, and orbiting under pointer input. Drawing is
//! a small perspective wireframe renderer over a 2D canvas context, so the
//! host Leptos layer only wires DOM events and animation frames to the engine.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`math`] | `Vec3` and axis-aligned bounds |
//! | [`camera`] | Perspective look-at camera, projection, orbit/dolly |
//! | [`tween`] | Ease-in-out cubic preset transitions |
//! | [`presets`] | Named camera presets per device class |
//! | [`input`] | Orbit drag / wheel gesture state |
//! | [`scene`] | Procedural garage + car wireframe |
//! | [`render`] | Canvas drawing (the only module touching `web_sys`) |
//! | [`consts`] | Shared numeric constants |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod input;
pub mod math;
pub mod presets;
pub mod render;
pub mod scene;
pub mod tween;
