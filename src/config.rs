//! Frontend Configuration
//!
//! Compile-time knobs shared across pages.

/// Rows per page on the Your Stories table.
pub const YOUR_BLOGS_PER_PAGE: usize = 10;

/// How long a toast stays on screen before dismissing itself, in milliseconds.
pub const TOAST_DISMISS_MS: u32 = 4000;
