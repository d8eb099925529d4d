//! UI Components
//!
//! Reusable Leptos components.

mod error_banner;
mod icons;
mod more_menu;
mod pagination;
mod search_bar;
mod spinner;
mod table;
mod toast;

pub use error_banner::ErrorBanner;
pub use icons::{MemberIcon, TagIcon};
pub use more_menu::MoreMenu;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
pub use spinner::Spinner;
pub use table::Table;
pub use toast::ToastHost;
