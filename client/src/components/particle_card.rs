//! Bento card shell with hover particles, tilt, magnetism and click ripple.
//!
//! ARCHITECTURE
//! ============
//! Effects are imperative: pointer handlers write inline styles and append
//! short-lived elements to the card instead of going through signals. Every
//! timer and particle a hover creates is adopted by the card's
//! [`HoverScope`](crate::util::hover_scope::HoverScope), which disposes them
//! on leave, on the next hover, or when the card unmounts. Click ripples live
//! in the card's [`EffectSlots`](crate::util::hover_scope::EffectSlots) and
//! release themselves on `animationend`.

use leptos::prelude::*;

use crate::config::EffectsConfig;
use crate::state::ui::UiState;

/// Card wrapper; `children` is the card content.
#[component]
pub fn ParticleCard(#[prop(into)] class: String, children: Children) -> impl IntoView {
    let effects = expect_context::<EffectsConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let active = Memo::new(move |_| effects.gated(ui.with(|u| u.animations_enabled)));
    let card_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let handlers = hydrate::handlers(card_ref, active);
    #[cfg(not(feature = "hydrate"))]
    let handlers = {
        let _ = active;
        (
            |_ev: leptos::ev::PointerEvent| {},
            |_ev: leptos::ev::PointerEvent| {},
            |_ev: leptos::ev::PointerEvent| {},
            |_ev: leptos::ev::MouseEvent| {},
        )
    };
    let (on_enter, on_move, on_leave, on_click) = handlers;

    view! {
        <div
            class=format!("bento-card {class}")
            node_ref=card_ref
            on:pointerenter=on_enter
            on:pointermove=on_move
            on:pointerleave=on_leave
            on:click=on_click
        >
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod hydrate {
    use gloo_timers::callback::Timeout;
    use leptos::prelude::*;
    use wasm_bindgen::{JsCast, closure::Closure};
    use web_sys::{Element, HtmlElement};

    use crate::config::EffectsConfig;
    use crate::util::dom::{random, rect_of, set_style};
    use crate::util::hover_scope::{EffectSlots, HoverHandle, HoverScope, RippleEffect};
    use crate::util::particles::{Drift, EXIT_MS, ParticlePool, particle_style, spawn_delay_ms};
    use crate::util::tilt::{CardTransform, RIPPLE_MS, card_transform, ripple};

    type PointerHandler = Box<dyn FnMut(leptos::ev::PointerEvent)>;
    type ClickHandler = Box<dyn FnMut(leptos::ev::MouseEvent)>;

    fn create_child(parent: &Element, class: &str, style: &str) -> Option<Element> {
        let el = web_sys::window()?.document()?.create_element("span").ok()?;
        el.set_class_name(class);
        let _ = el.set_attribute("style", style);
        parent.append_child(&el).ok()?;
        Some(el)
    }

    /// Layout size of the card, unaffected by the hover transform.
    fn layout_size(card: &HtmlElement) -> (f64, f64) {
        (f64::from(card.offset_width()), f64::from(card.offset_height()))
    }

    pub(super) fn handlers(
        card_ref: NodeRef<leptos::html::Div>,
        active: Memo<EffectsConfig>,
    ) -> (PointerHandler, PointerHandler, PointerHandler, ClickHandler) {
        let scope = StoredValue::new_local(HoverScope::<HoverHandle>::default());
        let pool = StoredValue::new_local(ParticlePool::default());
        let exit_timer = StoredValue::new_local(None::<Timeout>);
        let ripples = StoredValue::new_local(EffectSlots::<RippleEffect>::default());
        on_cleanup(move || {
            exit_timer.try_update_value(|t| {
                t.take();
            });
            scope.try_update_value(|s| {
                s.leave(|_| false);
            });
            ripples.try_update_value(|r| *r = EffectSlots::default());
        });

        let on_enter = move |_ev: leptos::ev::PointerEvent| {
            let cfg = active.get_untracked();
            let Some(card) = card_ref.get_untracked() else {
                return;
            };
            exit_timer.update_value(|t| {
                t.take();
            });
            let generation = scope.try_update_value(HoverScope::enter).unwrap_or_default();
            if !cfg.enable_particles {
                return;
            }
            let (width, height) = layout_size(&card);
            let mut rng = random;
            let seeds = pool
                .try_update_value(|p| p.ensure(cfg.particle_count, width, height, &mut rng).to_vec())
                .unwrap_or_default();
            for (index, seed) in seeds.into_iter().enumerate() {
                let card: Element = card.clone().into();
                let spawn = Timeout::new(spawn_delay_ms(index), move || {
                    if !scope.with_value(|s| s.is_current(generation)) {
                        return;
                    }
                    let mut rng = random;
                    let style = particle_style(seed, Drift::random(&mut rng));
                    if let Some(el) = create_child(&card, "particle", &style) {
                        scope.update_value(|s| {
                            s.adopt(generation, HoverHandle::Particle(el));
                        });
                    }
                });
                scope.update_value(|s| {
                    s.adopt(generation, HoverHandle::Timer(spawn));
                });
            }
        };

        let on_move = move |ev: leptos::ev::PointerEvent| {
            let cfg = active.get_untracked();
            if !cfg.enable_tilt && !cfg.enable_magnetism {
                return;
            }
            let Some(card) = card_ref.get_untracked() else {
                return;
            };
            let rect = rect_of(&card);
            let x = f64::from(ev.client_x()) - rect.left;
            let y = f64::from(ev.client_y()) - rect.top;
            let transform = card_transform(rect.width, rect.height, x, y, cfg.enable_tilt, cfg.enable_magnetism);
            set_style(&card, "transform", &transform.to_css());
        };

        let on_leave = move |_ev: leptos::ev::PointerEvent| {
            let Some(card) = card_ref.get_untracked() else {
                return;
            };
            let token = scope
                .try_update_value(|s| {
                    let token = s.leave(HoverHandle::is_particle);
                    for handle in s.retiring() {
                        if let HoverHandle::Particle(el) = handle {
                            let _ = el.class_list().add_1("particle--exit");
                        }
                    }
                    token
                })
                .unwrap_or_default();
            let finish = Timeout::new(EXIT_MS, move || {
                scope.try_update_value(|s| s.finish_retire(token));
            });
            exit_timer.update_value(|t| *t = Some(finish));
            set_style(&card, "transform", &CardTransform::default().to_css());
        };

        let on_click = move |ev: leptos::ev::MouseEvent| {
            if !active.get_untracked().click_effect {
                return;
            }
            let Some(card) = card_ref.get_untracked() else {
                return;
            };
            let rect = rect_of(&card);
            let r = ripple(
                rect.width,
                rect.height,
                f64::from(ev.client_x()) - rect.left,
                f64::from(ev.client_y()) - rect.top,
            );
            let style = format!(
                "left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;animation-duration:{RIPPLE_MS}ms",
                r.left, r.top, r.size, r.size
            );
            let Some(el) = create_child(&card, "ripple", &style) else {
                return;
            };
            let Some(key) = ripples.try_update_value(EffectSlots::reserve) else {
                el.remove();
                return;
            };
            let on_end = Closure::<dyn FnMut()>::new(move || {
                ripples.try_update_value(|r| r.release(key));
            });
            for event in ["animationend", "animationcancel"] {
                let _ = el.add_event_listener_with_callback(event, on_end.as_ref().unchecked_ref());
            }
            ripples.update_value(|r| r.insert(key, RippleEffect { el, on_end }));
        };

        (Box::new(on_enter), Box::new(on_move), Box::new(on_leave), Box::new(on_click))
    }
}
