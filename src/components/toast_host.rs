//! Toast container and the `show_toast` helper.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// How long a toast stays up unless dismissed by hand.
const DEFAULT_DURATION_MS: u64 = 4000;

/// Queue a toast and schedule its auto-dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) {
    let toast = Toast {
        id: uuid::Uuid::new_v4().to_string(),
        message: message.into(),
        kind,
        duration_ms: DEFAULT_DURATION_MS,
    };
    let id = toast.id.clone();
    let duration_ms = toast.duration_ms;
    toasts.update(|state| state.push(toast));
    schedule_dismiss(toasts, id, duration_ms);
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: String, duration_ms: u64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(duration_ms)).await;
            // The signal outlives every toast, but stay quiet if the app
            // is tearing down.
            let _ = toasts.try_update(|state| state.dismiss(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id, duration_ms);
    }
}

/// Fixed-position stack rendering the queued toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id.clone()
                children=move |toast: Toast| {
                    let id = toast.id.clone();
                    let class = format!("toast toast--{}", toast.kind.class_suffix());
                    view! {
                        <div class=class>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| toasts.update(|state| state.dismiss(&id))
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
