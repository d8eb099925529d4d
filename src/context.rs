//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use tracing::error;

use crate::api::ApiError;

/// App-wide error reporting surface provided via context
#[derive(Clone, Copy)]
pub struct ErrorSink {
    /// Latest unhandled API failure - read
    pub current: ReadSignal<Option<ApiError>>,
    /// Latest unhandled API failure - write
    set_current: WriteSignal<Option<ApiError>>,
}

impl ErrorSink {
    pub fn new(current: (ReadSignal<Option<ApiError>>, WriteSignal<Option<ApiError>>)) -> Self {
        Self {
            current: current.0,
            set_current: current.1,
        }
    }

    /// Record a failure for the banner, replacing whatever was shown before.
    pub fn report(&self, err: ApiError) {
        error!(%err, "api call failed");
        self.set_current.set(Some(err));
    }

    /// Dismiss the current failure.
    pub fn clear(&self) {
        self.set_current.set(None);
    }
}

/// Get the error sink from context
pub fn use_error_sink() -> ErrorSink {
    use_context::<ErrorSink>().expect("ErrorSink should be provided")
}
