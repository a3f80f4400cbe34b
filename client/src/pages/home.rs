//! Landing page: hero poster followed by the bento collection grid.

use leptos::prelude::*;

use crate::components::bento_grid::BentoGrid;
use crate::components::hero::Hero;
use crate::data::catalog::{PRODUCTS, featured};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        {featured().map(|(product, showcase)| view! { <Hero product=product showcase=showcase/> })}
        <h2 class="section-title">"The collection"</h2>
        <BentoGrid products=PRODUCTS/>
    }
}
