//! Content of a single bento product card.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::add_to_cart_button::AddToCartButton;
use crate::data::catalog::Product;
use crate::util::price::{format_price, parse_price};

#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let price = format_price(parse_price(product.price));
    let original = product.original_price.map(|p| format_price(parse_price(p)));

    view! {
        <article class="product-card">
            <A href=href attr:class="product-card__media">
                <img src=product.image alt=product.name loading="lazy"/>
            </A>
            {product.discount.map(|d| view! { <span class="product-card__badge">{d}</span> })}
            <div class="product-card__body">
                <span class="product-card__scale">{product.scale}</span>
                <h3 class="product-card__name">{product.name}</h3>
                <p class="product-card__tagline">{product.tagline}</p>
                <div class="product-card__footer">
                    <span class="product-card__price">
                        {price}
                        {original.map(|o| view! { <s class="product-card__was">{o}</s> })}
                    </span>
                    <AddToCartButton product=product/>
                </div>
            </div>
        </article>
    }
}
