//! Storydesk Frontend App
//!
//! Root component: masthead, error banner, routes, and the toast stack.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::ApiError;
use crate::components::{ErrorBanner, MemberIcon, ToastHost};
use crate::context::ErrorSink;
use crate::pages::{StoryView, YourStories};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let current_error = signal::<Option<ApiError>>(None);

    // Provide context to all children
    provide_context(ErrorSink::new(current_error));
    provide_context(Store::new(AppState::new()));

    view! {
        <Router>
            <header class="app-header">
                <MemberIcon class="app-logo"/>
                <span class="app-title">"Storydesk"</span>
            </header>
            <ErrorBanner/>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=YourStories/>
                <Route path=path!("/story/:id") view=StoryView/>
            </Routes>
            <ToastHost/>
        </Router>
    }
}
