//! Bridge between Leptos state and the imperative `viewer::engine::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The viewer crate owns camera math and drawing. This host creates the
//! engine once the canvas is mounted, forwards pointer and wheel input, keeps
//! the viewport and device class current, and runs a `requestAnimationFrame`
//! loop only while a preset transition is in flight. If the canvas cannot
//! provide a drawing context the loading overlay simply stays up.

use leptos::prelude::*;
use viewer::presets::PresetName;

use crate::components::preset_bar::PresetBar;
use crate::data::catalog::Showcase;
use crate::state::ui::UiState;

/// Configurator canvas plus its preset toolbar.
#[component]
pub fn ViewerHost(showcase: &'static Showcase) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let ready = RwSignal::new(false);
    let active = RwSignal::new(PresetName::Full);
    let device = Memo::new(move |_| ui.with(|u| u.device));
    let available = Memo::new(move |_| {
        let set = showcase.presets.for_device(device.get());
        PresetName::ALL.into_iter().filter(|name| set.is_available(*name)).collect::<Vec<_>>()
    });
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let (on_select, on_down, on_move, on_up, on_wheel) = hydrate::wire(showcase, canvas_ref, device, ready, active);
    #[cfg(not(feature = "hydrate"))]
    let (on_select, on_down, on_move, on_up, on_wheel) = {
        let _ = ready;
        (
            Callback::new(move |name: PresetName| active.set(name)),
            |_ev: leptos::ev::PointerEvent| {},
            |_ev: leptos::ev::PointerEvent| {},
            |_ev: leptos::ev::PointerEvent| {},
            |_ev: leptos::ev::WheelEvent| {},
        )
    };

    view! {
        <div class="viewer">
            <canvas
                class="viewer__canvas"
                node_ref=canvas_ref
                data-product=showcase.product_id
                data-garage=showcase.garage_asset
                data-model=showcase.car_asset
                on:pointerdown=on_down
                on:pointermove=on_move
                on:pointerup=on_up
                on:pointercancel=on_up
                on:wheel=on_wheel
            ></canvas>
            <Show when=move || !ready.get()>
                <div class="viewer__loading">"Loading model…"</div>
            </Show>
            <PresetBar available=available active=active on_select=on_select/>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod hydrate {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::prelude::*;
    use viewer::camera::ScreenPoint;
    use viewer::engine::Engine;
    use viewer::presets::{DeviceClass, PresetName};
    use viewer::scene::Scene;
    use wasm_bindgen::{JsCast, closure::Closure};

    use crate::data::catalog::Showcase;
    use crate::util::dom::frame_ms;

    type EngineSlot = StoredValue<Option<Engine>, LocalStorage>;

    fn draw(engine: &Engine) {
        if let Err(e) = engine.render() {
            log::warn!("viewer render failed: {e}");
        }
    }

    /// Match the backing store to the canvas box; the device class follows
    /// the window, not the canvas.
    fn fit(engine: &mut Engine, canvas_ref: NodeRef<leptos::html::Canvas>, device: DeviceClass) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        // A hidden canvas reports 0x0; the engine waits for a real box.
        let width = f64::from(canvas.client_width());
        let height = f64::from(canvas.client_height());
        engine.set_viewport(width, height, window.device_pixel_ratio().max(1.0));
        engine.core.set_device(device);
    }

    fn with_engine<R>(engine: EngineSlot, f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
        engine.try_update_value(|slot| slot.as_mut().map(f)).flatten()
    }

    /// Schedule one frame; the frame reschedules itself while a transition
    /// is running.
    fn request_frame(engine: EngineSlot, pending: StoredValue<bool>) {
        if pending.try_get_value().unwrap_or(true) {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            pending.try_update_value(|p| *p = false);
            let again = with_engine(engine, |e| {
                e.tick(frame_ms());
                draw(e);
                e.core.is_animating()
            })
            .unwrap_or(false);
            holder_for_cb.borrow_mut().take();
            if again {
                request_frame(engine, pending);
            }
        }) as Box<dyn FnMut(f64)>);

        if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
            pending.set_value(true);
            *holder.borrow_mut() = Some(cb);
        }
    }

    fn point(ev: &leptos::ev::PointerEvent) -> ScreenPoint {
        ScreenPoint::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
    }

    pub(super) fn wire(
        showcase: &'static Showcase,
        canvas_ref: NodeRef<leptos::html::Canvas>,
        device: Memo<DeviceClass>,
        ready: RwSignal<bool>,
        active: RwSignal<PresetName>,
    ) -> (
        Callback<PresetName>,
        impl Fn(leptos::ev::PointerEvent) + Copy + 'static,
        impl Fn(leptos::ev::PointerEvent) + Copy + 'static,
        impl Fn(leptos::ev::PointerEvent) + Copy + 'static,
        impl Fn(leptos::ev::WheelEvent) + Copy + 'static,
    ) {
        let engine: EngineSlot = StoredValue::new_local(None);
        let pending = StoredValue::new(false);

        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.with_value(Option::is_some) {
                return;
            }
            match Engine::new(canvas, Scene::showroom(showcase.car), showcase.presets) {
                Ok(mut instance) => {
                    fit(&mut instance, canvas_ref, device.get_untracked());
                    draw(&instance);
                    engine.set_value(Some(instance));
                    ready.set(true);
                    log::info!("viewer ready for {}", showcase.product_id);
                }
                Err(e) => log::warn!("viewer unavailable for {}: {e}", showcase.product_id),
            }
        });

        Effect::new(move || {
            let class = device.get();
            with_engine(engine, |e| {
                fit(e, canvas_ref, class);
                draw(e);
            });
        });

        let on_resize = window_event_listener(leptos::ev::resize, move |_| {
            with_engine(engine, |e| {
                fit(e, canvas_ref, device.get_untracked());
                draw(e);
            });
        });

        on_cleanup(move || {
            on_resize.remove();
            engine.try_update_value(|slot| {
                slot.take();
            });
        });

        let on_select = Callback::new(move |name: PresetName| {
            let now = frame_ms();
            match with_engine(engine, |e| e.go_to(name, now)) {
                Some(Ok(())) => {
                    active.set(name);
                    request_frame(engine, pending);
                }
                Some(Err(e)) => log::warn!("{e}"),
                None => {}
            }
        });

        let on_down = move |ev: leptos::ev::PointerEvent| {
            if let Some(canvas) = canvas_ref.get_untracked() {
                let _ = canvas.set_pointer_capture(ev.pointer_id());
            }
            with_engine(engine, |e| e.on_pointer_down(point(&ev)));
        };

        let on_move = move |ev: leptos::ev::PointerEvent| {
            with_engine(engine, |e| {
                if e.on_pointer_move(point(&ev)) {
                    draw(e);
                }
            });
        };

        let on_up = move |_ev: leptos::ev::PointerEvent| {
            with_engine(engine, Engine::on_pointer_up);
        };

        let on_wheel = move |ev: leptos::ev::WheelEvent| {
            ev.prevent_default();
            with_engine(engine, |e| {
                if e.on_wheel(ev.delta_y()) {
                    draw(e);
                }
            });
        };

        (on_select, on_down, on_move, on_up, on_wheel)
    }
}
