//! Stories List State
//!
//! Every mutation of the listing page funnels through one reducer over a
//! closed action enum, so a transition nobody declared cannot be requested
//! at all. The reducer and the derivation helpers below are pure values in,
//! values out; the page wires them to signals but they know nothing about
//! the view layer.

use std::collections::HashSet;

use crate::models::{Blog, BlogStatus};

/// Everything the stories list needs in order to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub blogs: Vec<Blog>,
    pub search_term: String,
    pub status_filters: HashSet<BlogStatus>,
    pub loading: bool,
    pub current_page: usize,
}

impl ListState {
    /// Initial state: every status selected, first page, loading until the
    /// first fetch settles.
    pub fn new() -> Self {
        Self {
            blogs: Vec::new(),
            search_term: String::new(),
            status_filters: BlogStatus::ALL.iter().copied().collect(),
            loading: true,
            current_page: 1,
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

/// State transitions the listing page can request.
#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    /// Replace the fetched stories wholesale.
    SetBlogs(Vec<Blog>),
    /// Change the title search term. Jumps back to the first page so the
    /// narrowed result set is never viewed from a stale offset.
    SetSearchTerm(String),
    /// Flip one status checkbox on or off.
    ToggleStatusFilter(BlogStatus),
    SetLoading(bool),
    SetCurrentPage(usize),
}

/// Applies one action, returning the next state. The input is not mutated.
pub fn reduce(state: &ListState, action: ListAction) -> ListState {
    let mut next = state.clone();
    match action {
        ListAction::SetBlogs(blogs) => next.blogs = blogs,
        ListAction::SetSearchTerm(term) => {
            next.search_term = term;
            next.current_page = 1;
        }
        ListAction::ToggleStatusFilter(status) => {
            if !next.status_filters.remove(&status) {
                next.status_filters.insert(status);
            }
        }
        ListAction::SetLoading(loading) => next.loading = loading,
        // Pages are 1-based; zero would render an empty window over a
        // non-empty list.
        ListAction::SetCurrentPage(page) => next.current_page = page.max(1),
    }
    next
}

/// Stories whose status is currently selected and whose title contains the
/// search term, case-insensitively. Input order is preserved. An empty
/// filter set selects nothing, an empty search term matches everything.
pub fn filter_blogs(
    blogs: &[Blog],
    status_filters: &HashSet<BlogStatus>,
    search_term: &str,
) -> Vec<Blog> {
    let needle = search_term.to_lowercase();
    blogs
        .iter()
        .filter(|blog| status_filters.contains(&blog.status))
        .filter(|blog| blog.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The window of `blogs` visible on the 1-based `page`, `per_page` rows at a
/// time. Pages past the end come back empty instead of panicking.
pub fn paginate(blogs: &[Blog], page: usize, per_page: usize) -> &[Blog] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= blogs.len() {
        return &[];
    }
    let end = (start + per_page).min(blogs.len());
    &blogs[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlogCategory;
    use chrono::{TimeZone, Utc};

    fn make_blog(id: &str, title: &str, status: BlogStatus) -> Blog {
        Blog {
            id: id.to_string(),
            title: title.to_string(),
            category_id: BlogCategory::News,
            status,
            updated_at: Utc.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap(),
        }
    }

    fn make_blogs(count: usize) -> Vec<Blog> {
        (0..count)
            .map(|n| make_blog(&format!("id-{n}"), &format!("Story {n}"), BlogStatus::Draft))
            .collect()
    }

    #[test]
    fn test_initial_state_selects_every_status() {
        let state = ListState::new();
        assert!(state.loading);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.status_filters.len(), BlogStatus::ALL.len());
        for status in BlogStatus::ALL {
            assert!(state.status_filters.contains(status));
        }
    }

    #[test]
    fn test_set_blogs_replaces_list_and_nothing_else() {
        let state = reduce(&ListState::new(), ListAction::SetSearchTerm("x".into()));
        let next = reduce(&state, ListAction::SetBlogs(make_blogs(3)));
        assert_eq!(next.blogs.len(), 3);
        assert_eq!(next.search_term, "x");
        assert_eq!(next.status_filters, state.status_filters);
    }

    #[test]
    fn test_set_search_term_resets_page() {
        let state = reduce(&ListState::new(), ListAction::SetCurrentPage(5));
        assert_eq!(state.current_page, 5);
        let next = reduce(&state, ListAction::SetSearchTerm("hello".into()));
        assert_eq!(next.search_term, "hello");
        assert_eq!(next.current_page, 1);
    }

    #[test]
    fn test_toggle_removes_then_restores() {
        let state = ListState::new();
        let without = reduce(&state, ListAction::ToggleStatusFilter(BlogStatus::Draft));
        assert!(!without.status_filters.contains(&BlogStatus::Draft));
        assert_eq!(without.status_filters.len(), 3);

        let restored = reduce(&without, ListAction::ToggleStatusFilter(BlogStatus::Draft));
        assert_eq!(restored.status_filters, state.status_filters);
    }

    #[test]
    fn test_set_current_page_clamps_to_one() {
        let state = reduce(&ListState::new(), ListAction::SetCurrentPage(0));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = ListState::new();
        let before = state.clone();
        let _ = reduce(&state, ListAction::SetSearchTerm("mutate?".into()));
        let _ = reduce(&state, ListAction::ToggleStatusFilter(BlogStatus::Pending));
        assert_eq!(state, before);
    }

    #[test]
    fn test_filter_matches_title_case_insensitively() {
        let blogs = vec![
            make_blog("a", "Hello World", BlogStatus::Draft),
            make_blog("b", "Goodbye", BlogStatus::Draft),
        ];
        let filters = ListState::new().status_filters;
        for term in ["hello", "WORLD"] {
            let hits = filter_blogs(&blogs, &filters, term);
            assert_eq!(hits.len(), 1, "term {term:?}");
            assert_eq!(hits[0].id, "a");
        }
    }

    #[test]
    fn test_filter_is_pure() {
        let blogs = vec![
            make_blog("a", "story", BlogStatus::Draft),
            make_blog("b", "story", BlogStatus::Published),
        ];
        let filters = ListState::new().status_filters;
        let first = filter_blogs(&blogs, &filters, "story");
        let second = filter_blogs(&blogs, &filters, "story");
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggling_a_status_off_narrows_the_filter() {
        let blogs = vec![
            make_blog("a", "One", BlogStatus::Draft),
            make_blog("b", "Two", BlogStatus::Published),
            make_blog("c", "Three", BlogStatus::Draft),
        ];
        let state = reduce(&ListState::new(), ListAction::SetBlogs(blogs));
        assert_eq!(
            filter_blogs(&state.blogs, &state.status_filters, &state.search_term).len(),
            3
        );

        let state = reduce(&state, ListAction::ToggleStatusFilter(BlogStatus::Draft));
        let hits = filter_blogs(&state.blogs, &state.status_filters, &state.search_term);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].status, BlogStatus::Published);
    }

    #[test]
    fn test_filter_requires_selected_status() {
        let blogs = vec![
            make_blog("a", "One", BlogStatus::Draft),
            make_blog("b", "Two", BlogStatus::Published),
        ];
        let filters: HashSet<BlogStatus> = [BlogStatus::Published].into_iter().collect();
        let hits = filter_blogs(&blogs, &filters, "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");
    }

    #[test]
    fn test_empty_filter_set_selects_nothing() {
        let blogs = make_blogs(4);
        let hits = filter_blogs(&blogs, &HashSet::new(), "");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let blogs = make_blogs(4);
        let filters = ListState::new().status_filters;
        assert_eq!(filter_blogs(&blogs, &filters, "").len(), 4);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let blogs = vec![
            make_blog("c", "story c", BlogStatus::Draft),
            make_blog("a", "story a", BlogStatus::Draft),
            make_blog("b", "story b", BlogStatus::Draft),
        ];
        let filters = ListState::new().status_filters;
        let hits = filter_blogs(&blogs, &filters, "story");
        let ids: Vec<&str> = hits.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_paginate_windows_by_page() {
        let blogs = make_blogs(25);
        let page1 = paginate(&blogs, 1, 10);
        assert_eq!(page1.len(), 10);
        assert_eq!(page1[0].id, "id-0");
        assert_eq!(page1[9].id, "id-9");

        let page3 = paginate(&blogs, 3, 10);
        assert_eq!(page3.len(), 5);
        assert_eq!(page3[0].id, "id-20");
        assert_eq!(page3[4].id, "id-24");
    }

    #[test]
    fn test_paginate_past_the_end_is_empty() {
        let blogs = make_blogs(25);
        assert!(paginate(&blogs, 4, 10).is_empty());
        assert!(paginate(&[], 1, 10).is_empty());
    }
}
