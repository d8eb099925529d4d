//! Your Stories Page
//!
//! The signed-in author's story list: searchable by title, filterable by
//! status, paginated. All page state lives in one reducer; the fetch only
//! ever lands through it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::{self, ApiError};
use crate::components::{MoreMenu, Pagination, SearchBar, Spinner, Table, TagIcon};
use crate::config::YOUR_BLOGS_PER_PAGE;
use crate::context::use_error_sink;
use crate::models::{Blog, BlogStatus};
use crate::state::{filter_blogs, paginate, reduce, ListAction, ListState};

const TABLE_HEADERS: &[&str] = &["Last Updated", "Title", "Category", "Status"];

/// Folds a fetch outcome into the reducer: the list lands (or the failure is
/// reported) before the loading flag clears, so the spinner never drops on
/// stale rows.
pub(crate) fn apply_my_blogs_result(
    result: Result<Vec<Blog>, ApiError>,
    mut dispatch: impl FnMut(ListAction),
    report_error: impl FnOnce(ApiError),
) {
    match result {
        Ok(blogs) => dispatch(ListAction::SetBlogs(blogs)),
        Err(err) => report_error(err),
    }
    dispatch(ListAction::SetLoading(false));
}

/// Story list page
#[component]
pub fn YourStories() -> impl IntoView {
    let errors = use_error_sink();
    let (state, set_state) = signal(ListState::new());
    // Row actions and the fetch can resolve after the page unmounts, so
    // every write goes through try_update and lands as a no-op once the
    // page's signals are disposed.
    let dispatch = move |action: ListAction| {
        let _ = set_state.try_update(|s| *s = reduce(s, action));
    };

    // Bumped by row actions after a delete or submit so the list refetches.
    let (reload_tick, set_reload_tick) = signal(0u32);
    let refresh = Callback::new(move |_: ()| {
        let _ = set_reload_tick.try_update(|n| *n += 1);
    });

    Effect::new(move |_| {
        let _ = reload_tick.get();
        dispatch(ListAction::SetLoading(true));
        spawn_local(async move {
            let result = api::my_blogs().await;
            apply_my_blogs_result(result, dispatch, move |err| errors.report(err));
        });
    });

    let loading = Memo::new(move |_| state.get().loading);
    let search_term = Memo::new(move |_| state.get().search_term);
    let current_page = Memo::new(move |_| state.get().current_page);
    let filtered = Memo::new(move |_| {
        let s = state.get();
        filter_blogs(&s.blogs, &s.status_filters, &s.search_term)
    });
    let total_filtered = Memo::new(move |_| filtered.get().len());
    let paginated = Memo::new(move |_| {
        paginate(&filtered.get(), current_page.get(), YOUR_BLOGS_PER_PAGE).to_vec()
    });

    let on_search = Callback::new(move |term: String| dispatch(ListAction::SetSearchTerm(term)));
    let on_page_change = Callback::new(move |page: usize| dispatch(ListAction::SetCurrentPage(page)));

    view! {
        <div class="your-stories">
            <Show
                when=move || !loading.get()
                fallback=move || view! {
                    <div class="page-loading">
                        <Spinner/>
                    </div>
                }
            >
                <h1>"Your Stories"</h1>
                <div class="list-controls">
                    <SearchBar search_term=search_term on_search=on_search/>
                    <div class="status-filters">
                        {BlogStatus::ALL.iter().map(|status| {
                            let status = *status;
                            view! {
                                <label class="status-filter">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || state.get().status_filters.contains(&status)
                                        on:change=move |_| dispatch(ListAction::ToggleStatusFilter(status))
                                    />
                                    {status.label()}
                                </label>
                            }
                        }).collect_view()}
                    </div>
                </div>
                <main class="stories-main">
                    <Table headers=TABLE_HEADERS>
                        <For
                            each=move || paginated.get()
                            key=|blog| blog.id.clone()
                            children=move |blog| view! { <StoryRow blog=blog on_refresh=refresh/> }
                        />
                    </Table>
                </main>
                <Pagination
                    total=total_filtered
                    current_page=current_page
                    per_page=YOUR_BLOGS_PER_PAGE
                    on_page_change=on_page_change
                />
            </Show>
        </div>
    }
}

/// One row of the stories table
#[component]
fn StoryRow(blog: Blog, #[prop(into)] on_refresh: Callback<()>) -> impl IntoView {
    let updated = blog.updated_at.format("%b %-d, %Y, %-I:%M %p").to_string();
    let href = format!("/story/{}", blog.id);
    // The link children capture their expression; clone the title up front
    // so the whole record stays movable into the row menu below.
    let title = blog.title.clone();

    view! {
        <tr>
            <td class="updated-cell">{updated}</td>
            <td class="title-cell">
                <A href=href>{title}</A>
            </td>
            <td>{blog.category_id.label()}</td>
            <td>
                <span class=blog.status.badge_class()>
                    <TagIcon class="badge-icon"/>
                    {blog.status.label()}
                </span>
            </td>
            <td class="menu-cell">
                <MoreMenu blog=blog on_refresh=on_refresh/>
            </td>
        </tr>
    }
}
