#![allow(clippy::float_cmp)]

use std::cell::{Cell, RefCell};

use super::*;

#[derive(Default)]
struct MemoryBackend {
    raw: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
    notified: RefCell<Vec<Vec<CartItem>>>,
}

impl CartBackend for &MemoryBackend {
    fn read_raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }

    fn write_raw(&self, raw: &str) -> Result<(), CartError> {
        if self.fail_writes.get() {
            return Err(CartError::Write("QuotaExceededError".to_owned()));
        }
        *self.raw.borrow_mut() = Some(raw.to_owned());
        Ok(())
    }

    fn notify(&self, items: &[CartItem]) {
        self.notified.borrow_mut().push(items.to_vec());
    }
}

fn bmw() -> CartItem {
    CartItem::from_product("BMW E34", "24", "/assets/bmw-e34.webp")
}

fn store(backend: &MemoryBackend) -> CartStore<&MemoryBackend> {
    CartStore::new(backend)
}

// =============================================================
// Pure helpers
// =============================================================

#[test]
fn from_product_uses_name_as_id_and_parses_price() {
    let item = bmw();
    assert_eq!(item.id, "BMW E34");
    assert_eq!(item.price, 24.0);
    assert_eq!(item.qty, 1);
}

#[test]
fn adding_twice_increments_single_line() {
    let mut items = Vec::new();
    add_item(&mut items, bmw());
    add_item(&mut items, bmw());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].qty, 2);
}

#[test]
fn add_ignores_incoming_quantity() {
    let mut items = Vec::new();
    add_item(&mut items, CartItem { qty: 7, ..bmw() });
    assert_eq!(items[0].qty, 1);
}

#[test]
fn decrement_removes_at_one_and_never_goes_to_zero() {
    let mut items = vec![CartItem { qty: 2, ..bmw() }];
    decrement(&mut items, "BMW E34");
    assert_eq!(items[0].qty, 1);
    decrement(&mut items, "BMW E34");
    assert!(items.is_empty());
    decrement(&mut items, "BMW E34");
    assert!(items.is_empty());
}

#[test]
fn increment_remove_and_clear() {
    let mut items = vec![bmw(), CartItem::from_product("Nissan Skyline R34", "32", "")];
    increment(&mut items, "BMW E34");
    increment(&mut items, "missing");
    assert_eq!(items[0].qty, 2);
    remove(&mut items, "BMW E34");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "Nissan Skyline R34");
    clear(&mut items);
    assert!(items.is_empty());
}

#[test]
fn totals() {
    let items = vec![CartItem { qty: 2, ..bmw() }, CartItem::from_product("Porsche 911", "$45.50", "")];
    assert_eq!(total_quantity(&items), 3);
    assert_eq!(subtotal(&items), 93.5);
    assert_eq!(total_quantity(&[]), 0);
}

#[test]
fn normalize_merges_duplicates_and_drops_zero() {
    let items = vec![bmw(), CartItem { qty: 0, ..CartItem::from_product("X", "1", "") }, CartItem { qty: 3, ..bmw() }];
    let out = normalize(items);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].qty, 4);
}

#[test]
fn cart_key_filter() {
    assert!(is_cart_key(Some("cart")));
    assert!(is_cart_key(None));
    assert!(!is_cart_key(Some("theme")));
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_missing_or_corrupt_is_empty() {
    assert!(decode(None).is_empty());
    assert!(decode(Some("{not json")).is_empty());
    assert!(decode(Some("{\"id\":\"a\"}")).is_empty());
}

#[test]
fn decode_accepts_quantity_alias() {
    let raw = r#"[{"id":"BMW E34","name":"BMW E34","price":24,"image":"","quantity":3}]"#;
    let items = decode(Some(raw));
    assert_eq!(items[0].qty, 3);
}

#[test]
fn decode_defaults_missing_qty_and_image() {
    let raw = r#"[{"id":"a","name":"A","price":1.5}]"#;
    let items = decode(Some(raw));
    assert_eq!(items[0].qty, 1);
    assert_eq!(items[0].image, "");
}

// =============================================================
// Store
// =============================================================

#[test]
fn scenario_add_bmw_twice() {
    let backend = MemoryBackend::default();
    let store = store(&backend);
    let items = store.mutate(|items| add_item(items, bmw())).expect("write");
    assert_eq!(items.len(), 1);

    let raw = backend.raw.borrow().clone().expect("stored");
    let stored: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(stored[0]["id"], "BMW E34");
    assert_eq!(stored[0]["name"], "BMW E34");
    assert_eq!(stored[0]["price"], 24.0);
    assert_eq!(stored[0]["qty"], 1);

    store.mutate(|items| add_item(items, bmw())).expect("write");
    let items = store.read();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].qty, 2);
}

#[test]
fn write_then_read_is_identity() {
    let backend = MemoryBackend::default();
    let store = store(&backend);
    let items = vec![CartItem { qty: 3, ..bmw() }, CartItem::from_product("Toyota Supra A80", "28", "/s.webp")];
    store.write(&items).expect("write");
    assert_eq!(store.read(), items);
}

#[test]
fn write_notifies_with_items() {
    let backend = MemoryBackend::default();
    let store = store(&backend);
    store.mutate(|items| add_item(items, bmw())).expect("write");
    let notified = backend.notified.borrow();
    assert_eq!(notified.len(), 1);
    assert_eq!(notified[0][0].id, "BMW E34");
}

#[test]
fn failed_write_reports_error_and_skips_notify() {
    let backend = MemoryBackend::default();
    backend.fail_writes.set(true);
    let store = store(&backend);
    let err = store.mutate(|items| add_item(items, bmw())).expect_err("quota");
    assert!(matches!(err, CartError::Write(_)));
    assert!(backend.notified.borrow().is_empty());
    assert!(store.read().is_empty());
}

#[test]
fn corrupt_storage_reads_empty_and_is_overwritten() {
    let backend = MemoryBackend::default();
    *backend.raw.borrow_mut() = Some("garbage".to_owned());
    let store = store(&backend);
    assert!(store.read().is_empty());
    store.mutate(|items| add_item(items, bmw())).expect("write");
    assert_eq!(store.read().len(), 1);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_backend_is_inert_without_a_browser() {
    let store = browser_store();
    assert!(store.read().is_empty());
    assert!(matches!(store.write(&[bmw()]), Err(CartError::Unavailable)));
}
