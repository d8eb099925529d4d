//! Pages
//!
//! Route-level views.

mod story_view;
mod your_stories;

pub use story_view::StoryView;
pub use your_stories::YourStories;
