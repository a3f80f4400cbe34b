//! Camera preset buttons under the configurator canvas.

use leptos::prelude::*;
use viewer::presets::PresetName;

/// One button per [`PresetName`], in toolbar order. Presets the product
/// lacks for the current device class render disabled.
#[component]
pub fn PresetBar(
    available: Memo<Vec<PresetName>>,
    active: RwSignal<PresetName>,
    on_select: Callback<PresetName>,
) -> impl IntoView {
    view! {
        <div class="preset-bar" role="toolbar" aria-label="Camera views">
            {PresetName::ALL
                .into_iter()
                .map(|name| {
                    let enabled = move || available.with(|a| a.contains(&name));
                    view! {
                        <button
                            class="preset-bar__btn"
                            class:preset-bar__btn--active=move || active.get() == name
                            data-preset=name.slug()
                            disabled=move || !enabled()
                            on:click=move |_| on_select.run(name)
                        >
                            {name.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
