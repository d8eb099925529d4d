//! Loading Spinner Component
//!
//! Full-page spinner shown while a page waits on its first fetch.

use leptos::prelude::*;

/// Centered loading indicator
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner"></div>
        </div>
    }
}
