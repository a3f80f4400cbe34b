//! Utility helpers shared across storefront UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep effect math, cart persistence and browser glue out of
//! components so the logic can be tested natively without a DOM.

pub mod add_to_cart;
pub mod cart_store;
pub mod countdown;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod hover_scope;
pub mod motion;
pub mod particles;
pub mod price;
pub mod spotlight;
pub mod tilt;
