//! Reactive mirror of the stored cart plus drawer visibility.
//!
//! The source of truth is `localStorage`; this state is refreshed from it on
//! startup, on `cart-updated` and on cross-tab `storage` events.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::util::cart_store::{self, CartItem};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub drawer_open: bool,
}

impl CartState {
    /// Total quantity for the navbar badge.
    #[must_use]
    pub fn count(&self) -> u32 {
        cart_store::total_quantity(&self.items)
    }

    #[must_use]
    pub fn subtotal(&self) -> f64 {
        cart_store::subtotal(&self.items)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the items, leaving the drawer as it is.
    pub fn sync(&mut self, items: Vec<CartItem>) {
        self.items = items;
    }
}

/// Apply `f` to the stored cart and mirror the result into `cart`.
///
/// # Errors
///
/// Storage write failure; `cart` is left unchanged.
pub fn commit(
    cart: leptos::prelude::RwSignal<CartState>,
    f: impl FnOnce(&mut Vec<CartItem>),
) -> Result<(), cart_store::CartError> {
    use leptos::prelude::Update;

    let items = cart_store::browser_store().mutate(f)?;
    cart.update(|c| c.sync(items));
    Ok(())
}
