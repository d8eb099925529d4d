//! Search Bar Component
//!
//! Title search box for list pages; fires on every keystroke.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Search input wired to a parent-owned term
#[component]
pub fn SearchBar(
    #[prop(into)] search_term: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    // Enter should not reload the page, filtering is already live.
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="search"
                placeholder="Search by title..."
                prop:value=move || search_term.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    on_search.run(input.value());
                }
            />
        </form>
    }
}
