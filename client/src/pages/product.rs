//! Product detail page with the 3D configurator when one exists.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::add_to_cart_button::AddToCartButton;
use crate::components::viewer_host::ViewerHost;
use crate::data::catalog::{Product, find_product, showcase_for};
use crate::util::price::{format_price, parse_price};

/// `/product/{id}`; unknown ids render a not-found notice.
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product = Memo::new(move |_| params.with(|p| p.get("id")).and_then(|id| find_product(&id)));

    move || match product.get() {
        Some(product) => view! { <ProductDetail product=product/> }.into_any(),
        None => view! {
            <section class="product product--missing">
                <Title text="Not found | Showroom"/>
                <h1>"Model not found"</h1>
                <A href="/">"Back to the collection"</A>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn ProductDetail(product: &'static Product) -> impl IntoView {
    let showcase = showcase_for(product.id);
    let price = format_price(parse_price(product.price));
    let original = product.original_price.map(|p| format_price(parse_price(p)));

    view! {
        <section class="product">
            <Title text=format!("{} | Showroom", product.name)/>
            <div class="product__stage">
                {match showcase {
                    Some(showcase) => view! { <ViewerHost showcase=showcase/> }.into_any(),
                    None => view! { <img class="product__image" src=product.image alt=product.name/> }.into_any(),
                }}
            </div>
            <div class="product__info">
                <span class="product__scale">{product.scale}</span>
                <h1 class="product__name">{product.name}</h1>
                <p class="product__tagline">{product.tagline}</p>
                <p class="product__price">
                    {price}
                    {original.map(|o| view! { <s class="product__was">{o}</s> })}
                    {product.discount.map(|d| view! { <span class="product__badge">{d}</span> })}
                </p>
                <AddToCartButton product=product large=true/>
            </div>
        </section>
    }
}
