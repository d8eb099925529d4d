//! Story View Page
//!
//! Reader for a single story, reached from the Your Stories table.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// Single-story reader
#[component]
pub fn StoryView() -> impl IntoView {
    let params = use_params_map();
    let story_id = Memo::new(move |_| params.with(|m| m.get("id")).unwrap_or_default());

    view! {
        <div class="story-view">
            <A href="/">"← Your Stories"</A>
            <h1>"Story"</h1>
            <p class="story-view-id">{move || story_id.get()}</p>
        </div>
    }
}
