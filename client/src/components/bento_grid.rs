//! Product grid with the pointer-following spotlight.
//!
//! ARCHITECTURE
//! ============
//! One window-level pointer listener measures the cards inside the section
//! and writes `--glow-*` custom properties on each card plus the position
//! and opacity of a single soft-glow element. Nothing here touches signals
//! per pointer move. Leaving the section or the window switches all glow off.

use leptos::prelude::*;

use crate::components::particle_card::ParticleCard;
use crate::components::product_card::ProductCard;
use crate::config::EffectsConfig;
use crate::data::catalog::Product;
use crate::state::ui::UiState;

#[component]
pub fn BentoGrid(products: &'static [Product]) -> impl IntoView {
    let effects = expect_context::<EffectsConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let active = Memo::new(move |_| effects.gated(ui.with(|u| u.animations_enabled)));
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let glow_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    spotlight::install(section_ref, glow_ref, active);
    #[cfg(not(feature = "hydrate"))]
    let _ = active;

    let section_style = format!("--glow-color: {}; --glow-radius: {}px", effects.glow_color, effects.spotlight_radius);

    view! {
        <section id="collection" class="bento-section" style=section_style node_ref=section_ref>
            <div class="spotlight" node_ref=glow_ref aria-hidden="true"></div>
            <div class="bento-grid">
                {products
                    .iter()
                    .enumerate()
                    .map(|(index, product)| {
                        let class = format!("bento-card--slot-{}", index % 6);
                        view! {
                            <ParticleCard class=class>
                                <ProductCard product=product/>
                            </ParticleCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(feature = "hydrate")]
mod spotlight {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::Element;

    use crate::config::EffectsConfig;
    use crate::util::dom::{rect_of, set_style};
    use crate::util::spotlight::{SpotlightFrame, compute};

    fn cards(section: &Element) -> Vec<Element> {
        let Ok(list) = section.query_selector_all(".bento-card") else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i).and_then(|n| n.dyn_into::<Element>().ok()))
            .collect()
    }

    fn paint(cards: &[Element], glow: Option<&Element>, frame: &SpotlightFrame, pointer: Option<(f64, f64)>) {
        for (card, g) in cards.iter().zip(&frame.cards) {
            set_style(card, "--glow-x", &format!("{:.2}%", g.x_pct));
            set_style(card, "--glow-y", &format!("{:.2}%", g.y_pct));
            set_style(card, "--glow-intensity", &format!("{:.3}", g.intensity));
        }
        if let Some(glow) = glow {
            if let Some((x, y)) = pointer {
                set_style(glow, "left", &format!("{x:.1}px"));
                set_style(glow, "top", &format!("{y:.1}px"));
            }
            set_style(glow, "opacity", &format!("{:.3}", frame.glow_opacity));
        }
    }

    fn deactivate(section_ref: NodeRef<leptos::html::Section>, glow_ref: NodeRef<leptos::html::Div>) {
        let Some(section) = section_ref.get_untracked() else {
            return;
        };
        let cards = cards(&section);
        let glow = glow_ref.get_untracked().map(Element::from);
        paint(&cards, glow.as_ref(), &SpotlightFrame::inactive(cards.len()), None);
    }

    pub(super) fn install(
        section_ref: NodeRef<leptos::html::Section>,
        glow_ref: NodeRef<leptos::html::Div>,
        active: Memo<EffectsConfig>,
    ) {
        // Turning effects off mid-session clears any glow left on screen.
        Effect::new(move || {
            if !active.get().enable_spotlight {
                deactivate(section_ref, glow_ref);
            }
        });

        let on_move = window_event_listener(leptos::ev::pointermove, move |ev| {
            let cfg = active.get_untracked();
            if !cfg.enable_spotlight {
                return;
            }
            let Some(section) = section_ref.get_untracked() else {
                return;
            };
            let x = f64::from(ev.client_x());
            let y = f64::from(ev.client_y());
            let bounds = rect_of(&section);
            let inside = x >= bounds.left
                && x <= bounds.left + bounds.width
                && y >= bounds.top
                && y <= bounds.top + bounds.height;
            if !inside {
                deactivate(section_ref, glow_ref);
                return;
            }
            let cards = cards(&section);
            let rects = cards.iter().map(rect_of).collect::<Vec<_>>();
            let frame = compute(&rects, x, y, &cfg);
            let glow = glow_ref.get_untracked().map(Element::from);
            paint(&cards, glow.as_ref(), &frame, Some((x, y)));
        });

        let on_out = window_event_listener(leptos::ev::pointerout, move |ev| {
            if ev.related_target().is_none() {
                deactivate(section_ref, glow_ref);
            }
        });

        on_cleanup(move || {
            on_move.remove();
            on_out.remove();
        });
    }
}
