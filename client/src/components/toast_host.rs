//! Toast stack. Each toast owns its dismissal timer, so a toast dismissed
//! by hand takes its timer with it.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|t| t.toasts.clone())
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        use crate::config::TOAST_DISMISS_MS;

        let timer = StoredValue::new_local(Some(Timeout::new(TOAST_DISMISS_MS, move || {
            toasts.update(|t| t.dismiss(id));
        })));
        on_cleanup(move || {
            timer.try_update_value(|t| {
                t.take();
            });
        });
    }

    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };

    view! {
        <div class=class>
            <span class="toast__message">{toast.message}</span>
            <button class="toast__close" aria-label="Dismiss" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                "✕"
            </button>
        </div>
    }
}
