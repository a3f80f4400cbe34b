//! Slide-out cart panel.
//!
//! Every button goes through [`commit`], so the drawer, the badge and any
//! other open tab see the same list. Escape or a backdrop click closes it.

use leptos::prelude::*;

use crate::state::cart::{CartState, commit};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::cart_store::{self, CartItem};
use crate::util::price::format_price;

/// Run a cart change, reporting storage failures as a toast.
fn apply(cart: RwSignal<CartState>, toasts: RwSignal<ToastState>, f: impl FnOnce(&mut Vec<CartItem>)) {
    if let Err(e) = commit(cart, f) {
        log::warn!("cart update failed: {e}");
        toasts.update(|t| {
            t.push("Could not update your cart", ToastKind::Error);
        });
    }
}

#[component]
pub fn CartDrawer() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let open = Memo::new(move |_| cart.with(|c| c.drawer_open));
    let close = move || cart.update(|c| c.drawer_open = false);

    #[cfg(feature = "hydrate")]
    {
        let on_key = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && cart.with_untracked(|c| c.drawer_open) {
                close();
            }
        });
        on_cleanup(move || on_key.remove());
    }

    view! {
        <div class="cart-drawer" class:cart-drawer--open=move || open.get() aria-hidden=move || (!open.get()).to_string()>
            <div class="cart-drawer__backdrop" on:click=move |_| close()></div>
            <aside class="cart-drawer__panel" role="dialog" aria-label="Cart">
                <header class="cart-drawer__header">
                    <h2>"Your cart"</h2>
                    <button class="cart-drawer__close" aria-label="Close cart" on:click=move |_| close()>"✕"</button>
                </header>
                <Show
                    when=move || cart.with(|c| !c.is_empty())
                    fallback=|| view! { <p class="cart-drawer__empty">"Your cart is empty."</p> }
                >
                    <ul class="cart-drawer__items">
                        <For
                            each=move || cart.with(|c| c.items.clone())
                            key=|item| (item.id.clone(), item.qty)
                            children=move |item| view! { <CartLine item=item cart=cart toasts=toasts/> }
                        />
                    </ul>
                    <footer class="cart-drawer__footer">
                        <div class="cart-drawer__subtotal">
                            <span>{move || format!("Subtotal ({} items)", cart.with(CartState::count))}</span>
                            <strong>{move || format_price(cart.with(CartState::subtotal))}</strong>
                        </div>
                        <button class="btn btn--ghost" on:click=move |_| apply(cart, toasts, cart_store::clear)>
                            "Clear cart"
                        </button>
                        <button class="btn btn--primary">"Checkout"</button>
                    </footer>
                </Show>
            </aside>
        </div>
    }
}

#[component]
fn CartLine(item: CartItem, cart: RwSignal<CartState>, toasts: RwSignal<ToastState>) -> impl IntoView {
    let line_total = format_price(item.line_total());
    let unit = format_price(item.price);
    let id_inc = item.id.clone();
    let id_dec = item.id.clone();
    let id_rm = item.id.clone();

    view! {
        <li class="cart-line">
            <img class="cart-line__image" src=item.image.clone() alt=item.name.clone()/>
            <div class="cart-line__body">
                <span class="cart-line__name">{item.name.clone()}</span>
                <span class="cart-line__unit">{unit}</span>
                <div class="cart-line__qty">
                    <button
                        aria-label="Decrease quantity"
                        on:click=move |_| {
                            let id = id_dec.clone();
                            apply(cart, toasts, move |items| cart_store::decrement(items, &id));
                        }
                    >
                        "−"
                    </button>
                    <span>{item.qty}</span>
                    <button
                        aria-label="Increase quantity"
                        on:click=move |_| {
                            let id = id_inc.clone();
                            apply(cart, toasts, move |items| cart_store::increment(items, &id));
                        }
                    >
                        "+"
                    </button>
                </div>
            </div>
            <div class="cart-line__side">
                <span class="cart-line__total">{line_total}</span>
                <button
                    class="cart-line__remove"
                    on:click=move |_| {
                        let id = id_rm.clone();
                        apply(cart, toasts, move |items| cart_store::remove(items, &id));
                    }
                >
                    "Remove"
                </button>
            </div>
        </li>
    }
}
