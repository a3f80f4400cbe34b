//! Top navigation bar with the cart badge.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::cart::CartState;

/// Brand, section links and the cart toggle.
#[component]
pub fn Navbar() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let count = Memo::new(move |_| cart.with(CartState::count));

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">"SHOWROOM"</A>
            <nav class="navbar__links">
                <a href="/#collection">"Collection"</a>
                <a href="/#launch">"Launch"</a>
            </nav>
            <button
                class="navbar__cart"
                aria-label="Open cart"
                on:click=move |_| cart.update(|c| c.drawer_open = true)
            >
                <span class="navbar__cart-icon" aria-hidden="true">"🛒"</span>
                <Show when=move || { count.get() > 0 }>
                    <span class="navbar__badge">{move || count.get()}</span>
                </Show>
            </button>
        </header>
    }
}
