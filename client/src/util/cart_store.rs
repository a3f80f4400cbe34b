//! Storage-backed cart with change notification.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart lives in `localStorage` under [`CART_STORAGE_KEY`] as a JSON array.
//! Every write re-broadcasts the list as a `cart-updated` event on `window` so
//! other components in the page refresh; other tabs learn about it from the
//! native `storage` event. The list helpers are pure and operate on a
//! `Vec<CartItem>`; [`CartStore::mutate`] wraps them in one
//! read-modify-write. There is no lock: two tabs writing at once race and the
//! later write wins.

#[cfg(test)]
#[path = "cart_store_test.rs"]
mod cart_store_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CART_STORAGE_KEY;
#[cfg(feature = "hydrate")]
use crate::config::CART_EVENT;
use crate::util::price::parse_price;

/// One cart line. `id` is the product name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(alias = "quantity", default = "one")]
    pub qty: u32,
}

fn one() -> u32 {
    1
}

impl CartItem {
    /// A fresh line for a catalog product with quantity 1.
    #[must_use]
    pub fn from_product(name: &str, price: &str, image: &str) -> Self {
        Self { id: name.to_owned(), name: name.to_owned(), price: parse_price(price), image: image.to_owned(), qty: 1 }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

/// Cart persistence failures.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Write(String),
    #[error("cart serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

// =============================================================
// Pure list helpers
// =============================================================

/// Add one of `item`: bump the quantity of the existing line with the same id,
/// or append `item` with quantity 1.
pub fn add_item(items: &mut Vec<CartItem>, item: CartItem) {
    match items.iter_mut().find(|line| line.id == item.id) {
        Some(line) => line.qty = line.qty.saturating_add(1),
        None => items.push(CartItem { qty: 1, ..item }),
    }
}

/// Bump the quantity of line `id`. Unknown ids are ignored.
pub fn increment(items: &mut [CartItem], id: &str) {
    if let Some(line) = items.iter_mut().find(|line| line.id == id) {
        line.qty = line.qty.saturating_add(1);
    }
}

/// Drop one of line `id`, removing the line when it reaches zero.
pub fn decrement(items: &mut Vec<CartItem>, id: &str) {
    let Some(pos) = items.iter().position(|line| line.id == id) else {
        return;
    };
    if items[pos].qty <= 1 {
        items.remove(pos);
    } else {
        items[pos].qty -= 1;
    }
}

pub fn remove(items: &mut Vec<CartItem>, id: &str) {
    items.retain(|line| line.id != id);
}

pub fn clear(items: &mut Vec<CartItem>) {
    items.clear();
}

/// Enforce the list invariants on data read from storage: no zero
/// quantities, one line per id (duplicates merge into the first).
pub fn normalize(items: Vec<CartItem>) -> Vec<CartItem> {
    let mut out: Vec<CartItem> = Vec::with_capacity(items.len());
    for item in items.into_iter().filter(|item| item.qty > 0) {
        match out.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.qty = line.qty.saturating_add(item.qty),
            None => out.push(item),
        }
    }
    out
}

/// Sum of quantities, for the navbar badge.
#[must_use]
pub fn total_quantity(items: &[CartItem]) -> u32 {
    items.iter().fold(0_u32, |acc, line| acc.saturating_add(line.qty))
}

#[must_use]
pub fn subtotal(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Whether a `storage` event with this key concerns the cart. `None` means
/// the whole store was cleared.
#[must_use]
pub fn is_cart_key(key: Option<&str>) -> bool {
    key.is_none_or(|k| k == CART_STORAGE_KEY)
}

/// Decode stored text. Missing or corrupt data is an empty cart.
#[must_use]
pub fn decode(raw: Option<&str>) -> Vec<CartItem> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<CartItem>>(raw) {
        Ok(items) => normalize(items),
        Err(e) => {
            log::warn!("discarding unreadable cart: {e}");
            Vec::new()
        }
    }
}

// =============================================================
// Store
// =============================================================

/// Where the serialized cart lives and how writes are announced.
pub trait CartBackend {
    fn read_raw(&self) -> Option<String>;

    /// # Errors
    ///
    /// Fails when the underlying storage rejects the write.
    fn write_raw(&self, raw: &str) -> Result<(), CartError>;

    fn notify(&self, items: &[CartItem]);
}

/// Read-modify-write boundary over a [`CartBackend`].
pub struct CartStore<B> {
    backend: B,
}

impl<B: CartBackend> CartStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Current cart, empty on missing or corrupt data.
    pub fn read(&self) -> Vec<CartItem> {
        decode(self.backend.read_raw().as_deref())
    }

    /// Persist `items` and broadcast the change.
    ///
    /// # Errors
    ///
    /// Serialization or storage failure; nothing is broadcast in that case.
    pub fn write(&self, items: &[CartItem]) -> Result<(), CartError> {
        let raw = serde_json::to_string(items)?;
        self.backend.write_raw(&raw)?;
        self.backend.notify(items);
        Ok(())
    }

    /// Apply `f` to the stored list and persist the result.
    ///
    /// # Errors
    ///
    /// See [`CartStore::write`].
    pub fn mutate(&self, f: impl FnOnce(&mut Vec<CartItem>)) -> Result<Vec<CartItem>, CartError> {
        let mut items = self.read();
        f(&mut items);
        self.write(&items)?;
        Ok(items)
    }
}

/// `window.localStorage` plus a `cart-updated` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserBackend;

impl CartBackend for BrowserBackend {
    fn read_raw(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(CART_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write_raw(&self, raw: &str) -> Result<(), CartError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(CartError::Unavailable)?;
            storage
                .set_item(CART_STORAGE_KEY, raw)
                .map_err(|e| CartError::Write(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = raw;
            Err(CartError::Unavailable)
        }
    }

    fn notify(&self, items: &[CartItem]) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let detail = serde_json::to_string(items)
                .ok()
                .and_then(|raw| js_sys::JSON::parse(&raw).ok())
                .unwrap_or(wasm_bindgen::JsValue::NULL);
            let init = web_sys::CustomEventInit::new();
            init.set_detail(&detail);
            if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict(CART_EVENT, &init) {
                let _ = window.dispatch_event(&event);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = items;
        }
    }
}

/// The cart as the running page sees it.
#[must_use]
pub fn browser_store() -> CartStore<BrowserBackend> {
    CartStore::new(BrowserBackend)
}
