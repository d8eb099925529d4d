//! Pagination Component
//!
//! Numbered page controls under a filtered table.

use leptos::prelude::*;

/// Number of pages needed to show `total` rows, `per_page` at a time.
/// Zero rows still counts as one (empty) page so the controls stay rendered.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}

/// Page controls
#[component]
pub fn Pagination(
    total: Memo<usize>,
    current_page: Memo<usize>,
    per_page: usize,
    #[prop(into)] on_page_change: Callback<usize>,
) -> impl IntoView {
    let pages = Memo::new(move |_| page_count(total.get(), per_page));

    // Tightening the filter can strand the viewer past the last page; snap
    // back to the page that still exists.
    Effect::new(move |_| {
        let last = pages.get();
        if current_page.get() > last {
            on_page_change.run(last);
        }
    });

    view! {
        <nav class="pagination">
            <button
                class="page-btn"
                disabled=move || current_page.get() <= 1
                on:click=move |_| on_page_change.run(current_page.get() - 1)
            >
                "Prev"
            </button>
            <For
                each=move || 1..=pages.get()
                key=|page| *page
                children=move |page| {
                    view! {
                        <button
                            class=move || {
                                if current_page.get() == page { "page-btn active" } else { "page-btn" }
                            }
                            on:click=move |_| on_page_change.run(page)
                        >
                            {page}
                        </button>
                    }
                }
            />
            <button
                class="page-btn"
                disabled=move || current_page.get() >= pages.get()
                on:click=move |_| on_page_change.run(current_page.get() + 1)
            >
                "Next"
            </button>
        </nav>
    }
}
