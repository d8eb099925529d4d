//! More Menu Component
//!
//! Per-row actions menu on the stories table. Which actions appear depends
//! on the story's status; handlers call the backend, toast on success, and
//! ask the page to refetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_error_sink;
use crate::models::{Blog, BlogStatus};
use crate::store::{store_push_toast, use_app_store};

/// Row-level actions, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Read,
    SubmitForApproval,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Read => "Read",
            RowAction::SubmitForApproval => "Submit for approval",
            RowAction::Delete => "Delete",
        }
    }
}

/// Which actions a story in the given status offers. Only drafts can enter
/// the review queue, and published stories cannot be deleted from here.
pub fn row_actions_for(status: BlogStatus) -> Vec<RowAction> {
    let mut actions = vec![RowAction::Read];
    if status == BlogStatus::Draft {
        actions.push(RowAction::SubmitForApproval);
    }
    if status != BlogStatus::Published {
        actions.push(RowAction::Delete);
    }
    actions
}

/// Per-row dropdown menu
#[component]
pub fn MoreMenu(blog: Blog, #[prop(into)] on_refresh: Callback<()>) -> impl IntoView {
    let errors = use_error_sink();
    let store = use_app_store();
    let navigate = leptos_router::hooks::use_navigate();
    let (open, set_open) = signal(false);

    let status = blog.status;
    let story_id = blog.id;

    view! {
        <div class="more-menu">
            <button
                class="more-menu-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_open.update(|o| *o = !*o);
                }
            >
                "⋮"
            </button>
            <Show when=move || open.get()>
                <div class="more-menu-backdrop" on:click=move |_| set_open.set(false)></div>
                <div class="more-menu-list">
                    {row_actions_for(status).into_iter().map(|action| {
                        match action {
                            RowAction::Read => {
                                let navigate = navigate.clone();
                                let id = story_id.clone();
                                view! {
                                    <button
                                        class="menu-option"
                                        on:click=move |_| {
                                            set_open.set(false);
                                            navigate(&format!("/story/{id}"), Default::default());
                                        }
                                    >
                                        {action.label()}
                                    </button>
                                }.into_any()
                            }
                            RowAction::SubmitForApproval => {
                                let id = story_id.clone();
                                view! {
                                    <button
                                        class="menu-option"
                                        on:click=move |_| {
                                            set_open.set(false);
                                            let id = id.clone();
                                            spawn_local(async move {
                                                match api::submit_for_approval(&id).await {
                                                    Ok(()) => {
                                                        store_push_toast(
                                                            &store,
                                                            "Story submitted for approval",
                                                        );
                                                        // The response can land after the page is
                                                        // gone; a disposed callback is a no-op.
                                                        let _ = on_refresh.try_run(());
                                                    }
                                                    Err(e) => errors.report(e),
                                                }
                                            });
                                        }
                                    >
                                        {action.label()}
                                    </button>
                                }.into_any()
                            }
                            RowAction::Delete => {
                                let id = story_id.clone();
                                let on_confirm = Callback::new(move |_: ()| {
                                    set_open.set(false);
                                    let id = id.clone();
                                    spawn_local(async move {
                                        match api::delete_blog(&id).await {
                                            Ok(()) => {
                                                store_push_toast(&store, "Story deleted");
                                                let _ = on_refresh.try_run(());
                                            }
                                            Err(e) => errors.report(e),
                                        }
                                    });
                                });
                                view! { <DeleteMenuOption on_confirm=on_confirm/> }.into_any()
                            }
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Two-step delete option: arm on first click, confirm or back out
#[component]
fn DeleteMenuOption(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        <Show when=move || !armed.get()>
            <button
                class="menu-option danger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_armed.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || armed.get()>
            <span class="menu-confirm">
                <span class="menu-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drafts_offer_every_action() {
        assert_eq!(
            row_actions_for(BlogStatus::Draft),
            vec![RowAction::Read, RowAction::SubmitForApproval, RowAction::Delete]
        );
    }

    #[test]
    fn test_published_stories_are_read_only() {
        assert_eq!(row_actions_for(BlogStatus::Published), vec![RowAction::Read]);
    }

    #[test]
    fn test_in_review_stories_can_be_deleted_but_not_resubmitted() {
        for status in [BlogStatus::Pending, BlogStatus::Approved] {
            assert_eq!(
                row_actions_for(status),
                vec![RowAction::Read, RowAction::Delete]
            );
        }
    }

    #[test]
    fn test_refresh_after_page_disposal_is_a_noop() {
        // A delete or submit response can arrive after navigation away; the
        // page-owned refresh callback must then do nothing instead of
        // touching a disposed arena value.
        let owner = Owner::new();
        let on_refresh = owner.with(|| Callback::new(|_: ()| ()));
        assert!(on_refresh.try_run(()).is_some());

        owner.cleanup();
        drop(owner);
        assert!(on_refresh.try_run(()).is_none());
    }
}
