//! Toast stack rendering and the `notify` entry point used by handlers.

use feed::{Notice, Tone};
use leptos::prelude::*;

use crate::state::toast::ToastState;
use crate::util::task::spawn;

/// Log `notice`, show it, and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    match notice.tone {
        Tone::Error => log::warn!("{notice}"),
        Tone::Info => log::info!("{notice}"),
    }
    let mut id = 0;
    toasts.update(|t| id = t.push(notice));
    spawn(async move {
        #[cfg(feature = "csr")]
        gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::toast::TOAST_TTL_MS)).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let error = toast.notice.is_error();
                        view! {
                            <li
                                class="toast"
                                class:toast--error=error
                                role=if error { "alert" } else { "status" }
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                <p class="toast__title">{toast.notice.title}</p>
                                {toast.notice.description.map(|d| view! { <p class="toast__description">{d}</p> })}
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ol>
    }
}
