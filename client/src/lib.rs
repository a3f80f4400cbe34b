//! # client
//!
//! Leptos + WASM storefront for die-cast model cars.
//!
//! This crate contains the pages, components, reactive state and browser
//! utilities of the shop: the bento product grid with its pointer effects,
//! the storage-backed cart, the hero poster and the product configurator. It
//! embeds the `viewer` crate for the 3D camera and drawing.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
