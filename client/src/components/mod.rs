//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and interactive surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod add_to_cart_button;
pub mod bento_grid;
pub mod cart_drawer;
pub mod hero;
pub mod navbar;
pub mod particle_card;
pub mod preset_bar;
pub mod product_card;
pub mod toast_host;
pub mod viewer_host;
