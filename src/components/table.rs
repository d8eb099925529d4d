//! Table Component
//!
//! Shared table chrome for list pages; callers supply the rows.

use leptos::prelude::*;

/// Data table with a fixed header row
#[component]
pub fn Table(headers: &'static [&'static str], children: Children) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {headers.iter().map(|header| view! { <th>{*header}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>{children()}</tbody>
        </table>
    }
}
