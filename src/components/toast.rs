//! Toast Host Component
//!
//! Renders the global toast stack; each toast dismisses itself after a
//! fixed interval or on click.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::TOAST_DISMISS_MS;
use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields, Toast};

/// Fixed-position stack of transient notifications
#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    // One timer per toast; dismissal is a no-op if the user
                    // clicked it away first.
                    spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
                        store_dismiss_toast(&store, id);
                    });

                    view! {
                        <div
                            class="toast"
                            on:click=move |_| store_dismiss_toast(&store, id)
                        >
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
