#![allow(clippy::float_cmp)]

use super::*;

fn item(name: &str, price: &str, qty: u32) -> CartItem {
    CartItem { qty, ..CartItem::from_product(name, price, "") }
}

#[test]
fn empty_by_default() {
    let state = CartState::default();
    assert!(state.is_empty());
    assert_eq!(state.count(), 0);
    assert_eq!(state.subtotal(), 0.0);
    assert!(!state.drawer_open);
}

#[test]
fn count_and_subtotal_follow_items() {
    let mut state = CartState::default();
    state.sync(vec![item("BMW E34", "24", 2), item("Toyota Supra A80", "28", 1)]);
    assert_eq!(state.count(), 3);
    assert_eq!(state.subtotal(), 76.0);
}

#[test]
fn sync_keeps_drawer_state() {
    let mut state = CartState { drawer_open: true, ..CartState::default() };
    state.sync(vec![item("BMW E34", "24", 1)]);
    assert!(state.drawer_open);
}
