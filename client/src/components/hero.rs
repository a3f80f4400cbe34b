//! Hero poster: headline, launch countdown and the featured model viewer.

use leptos::prelude::*;

use crate::components::add_to_cart_button::AddToCartButton;
use crate::components::viewer_host::ViewerHost;
use crate::data::catalog::{LAUNCH_AT_MS, Product, Showcase};
use crate::util::countdown::Countdown;

#[component]
pub fn Hero(product: &'static Product, showcase: &'static Showcase) -> impl IntoView {
    // `None` until hydrated so server and client render the same markup.
    let now = RwSignal::new(None::<f64>);

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;

        use crate::util::dom::now_ms;

        let ticker = StoredValue::new_local(None::<Interval>);
        Effect::new(move || {
            now.set(Some(now_ms()));
            ticker.update_value(|t| {
                *t = Some(Interval::new(1_000, move || now.set(Some(now_ms()))));
            });
        });
        on_cleanup(move || {
            ticker.try_update_value(|t| {
                t.take();
            });
        });
    }

    let countdown = Memo::new(move |_| now.get().map(|n| Countdown::until(LAUNCH_AT_MS, n)));

    view! {
        <section id="launch" class="hero">
            <div class="hero__copy">
                <span class="hero__eyebrow">"New arrival · " {product.scale}</span>
                <h1 class="hero__title">{product.name}</h1>
                <p class="hero__tagline">{product.tagline}</p>
                <div class="hero__countdown" aria-live="polite">
                    {move || match countdown.get() {
                        Some(c) if c.is_elapsed() => {
                            view! { <span class="hero__available">"Available now"</span> }.into_any()
                        }
                        Some(c) => {
                            c.parts()
                                .into_iter()
                                .map(|(value, unit)| {
                                    view! {
                                        <span class="hero__unit">
                                            <strong>{value}</strong>
                                            <small>{unit}</small>
                                        </span>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                        None => view! { <span class="hero__unit hero__unit--pending">"--"</span> }.into_any(),
                    }}
                </div>
                <AddToCartButton product=product large=true/>
            </div>
            <div class="hero__stage">
                <ViewerHost showcase=showcase/>
            </div>
        </section>
    }
}
