//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::cart_drawer::CartDrawer;
use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::config::EffectsConfig;
use crate::pages::{home::HomePage, product::ProductPage};
use crate::state::{cart::CartState, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, keeps the cart mirror in sync with
/// storage, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = RwSignal::new(CartState::default());
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(cart);
    provide_context(toasts);
    provide_context(ui);
    provide_context(EffectsConfig::default());

    #[cfg(feature = "hydrate")]
    install_browser_sync(cart, ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/showroom.css"/>
        <Title text="Showroom | Die-cast model cars"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| view! { <p class="page__missing">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductPage/>
                </Routes>
            </main>
            <CartDrawer/>
            <ToastHost/>
        </Router>
    }
}

/// Load the cart and device state once hydrated, then follow `cart-updated`,
/// cross-tab `storage` and `resize` events until the app unmounts.
#[cfg(feature = "hydrate")]
fn install_browser_sync(cart: RwSignal<CartState>, ui: RwSignal<UiState>) {
    use crate::config::CART_EVENT;
    use crate::util::cart_store::{browser_store, is_cart_key};
    use crate::util::motion::{detect_animations_enabled, detect_device};

    let refresh_cart = move || cart.update(|c| c.sync(browser_store().read()));
    let refresh_ui = move || {
        ui.update(|u| {
            if u.observe(detect_animations_enabled(), detect_device()) {
                log::info!("effects {}, device {:?}", if u.animations_enabled { "on" } else { "off" }, u.device);
            }
        });
    };

    Effect::new(move || {
        refresh_cart();
        refresh_ui();
    });

    let on_cart_event = window_event_listener_untyped(CART_EVENT, move |_| refresh_cart());
    let on_storage = window_event_listener(leptos::ev::storage, move |ev| {
        if is_cart_key(ev.key().as_deref()) {
            refresh_cart();
        }
    });
    let on_resize = window_event_listener(leptos::ev::resize, move |_| refresh_ui());

    on_cleanup(move || {
        on_cart_event.remove();
        on_storage.remove();
        on_resize.remove();
    });
}
