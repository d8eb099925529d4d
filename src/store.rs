//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// One transient notification. Failures go to the ErrorSink banner, so
/// toasts only ever confirm an action that worked.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Toasts currently on screen, oldest first
    pub toasts: Vec<Toast>,
    /// Monotonic counter so every toast gets a distinct render key
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Push a toast, returning its id so the host can schedule dismissal
pub fn store_push_toast(store: &AppStore, message: impl Into<String>) -> u32 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().write().push(Toast {
        id,
        message: message.into(),
    });
    id
}

/// Remove a toast by id; a no-op when it was already dismissed by hand
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_distinct_ids_and_dismiss_removes_one() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new());
            let first = store_push_toast(&store, "Story submitted for approval");
            let second = store_push_toast(&store, "Story deleted");
            assert_ne!(first, second);
            assert_eq!(store.toasts().get_untracked().len(), 2);

            store_dismiss_toast(&store, first);
            let left = store.toasts().get_untracked();
            assert_eq!(left.len(), 1);
            assert_eq!(left[0].message, "Story deleted");

            // Dismissing again is a no-op, the auto-dismiss timer may fire
            // after a click already removed the toast.
            store_dismiss_toast(&store, first);
            assert_eq!(store.toasts().get_untracked().len(), 1);
        });
    }
}
