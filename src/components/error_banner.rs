//! Error Banner Component
//!
//! Dismissible banner under the masthead showing the most recent API
//! failure.

use leptos::prelude::*;

use crate::context::use_error_sink;

/// App-wide failure banner
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let errors = use_error_sink();

    view! {
        <Show when=move || errors.current.get().is_some()>
            <div class="error-banner">
                <span class="error-banner-text">
                    {move || errors.current.get().map(|e| e.to_string()).unwrap_or_default()}
                </span>
                <button class="error-banner-dismiss" on:click=move |_| errors.clear()>
                    "✕"
                </button>
            </div>
        </Show>
    }
}
