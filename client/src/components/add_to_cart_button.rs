//! Add-to-cart button with optimistic status feedback.
//!
//! The cart write happens on press; the settle and reset timers only drive
//! what the button shows. Both timers belong to the button and are dropped
//! (cancelled) when it unmounts.

use leptos::prelude::*;

use crate::data::catalog::Product;
use crate::state::cart::CartState;
use crate::state::toast::ToastState;
use crate::util::add_to_cart::AddToCartState;

#[component]
pub fn AddToCartButton(product: &'static Product, #[prop(optional)] large: bool) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(AddToCartState::default());

    #[cfg(feature = "hydrate")]
    let timers = StoredValue::new_local(Vec::<gloo_timers::callback::Timeout>::new());
    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        timers.try_update_value(Vec::clear);
    });

    let on_click = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                use gloo_timers::callback::Timeout;

                use crate::config::{ADD_RESET_MS, ADD_SETTLE_MS};
                use crate::state::cart::commit;
                use crate::state::toast::ToastKind;
                use crate::util::add_to_cart::AddStatus;
                use crate::util::cart_store::{CartItem, add_item};

                ev.prevent_default();
                ev.stop_propagation();
                let mut accepted = false;
                state.update(|s| accepted = s.try_begin());
                if !accepted {
                    return;
                }

                let item = CartItem::from_product(product.name, product.price, product.image);
                let outcome = commit(cart, move |items| add_item(items, item));
                if let Err(e) = &outcome {
                    log::warn!("add to cart failed for {}: {e}", product.name);
                }
                state.update(|s| s.record_outcome(outcome.is_ok()));

                let settle = Timeout::new(ADD_SETTLE_MS, move || {
                    let mut status = AddStatus::Idle;
                    state.update(|s| status = s.settle());
                    match status {
                        AddStatus::Success => {
                            toasts.update(|t| {
                                t.push("Added to cart", ToastKind::Success);
                            });
                        }
                        AddStatus::Fail => {
                            toasts.update(|t| {
                                t.push("Could not add to cart", ToastKind::Error);
                            });
                        }
                        AddStatus::Idle => {}
                    }
                    let reset = Timeout::new(ADD_RESET_MS, move || state.update(AddToCartState::reset));
                    timers.update_value(|t| t.push(reset));
                });
                timers.update_value(|t| {
                    t.clear();
                    t.push(settle);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (cart, toasts, product);
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <button
            class=move || {
                let base = state.with(AddToCartState::class);
                if large { format!("{base} add-to-cart--large") } else { base.to_owned() }
            }
            disabled=move || state.with(|s| s.busy)
            on:click=on_click
        >
            {move || state.with(AddToCartState::label)}
        </button>
    }
}
