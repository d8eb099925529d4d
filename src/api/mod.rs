//! Backend API Wrappers
//!
//! HTTP bindings to the blog backend, organized by domain. Every call
//! resolves to a typed [`ApiError`] so callers can report failures without
//! string matching.

mod blog;

use thiserror::Error;

// Re-export all public items
pub use blog::*;

/// Why an API call failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// The response arrived but its body did not match the expected shape.
    #[error("unexpected response: {0}")]
    BadResponse(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::BadResponse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Passes 2xx responses through and turns everything else into
/// [`ApiError::Status`].
fn error_for_status(rsp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    let status = rsp.status();
    if status >= 200 && status < 300 {
        Ok(rsp)
    } else {
        Err(ApiError::Status {
            status,
            message: rsp.status_text(),
        })
    }
}
