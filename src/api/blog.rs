//! Blog Endpoints
//!
//! Bindings for the story endpoints the frontend calls.

use gloo_net::http::Request;
use serde::Deserialize;
use tracing::debug;

use super::{error_for_status, ApiError};
use crate::models::Blog;

// ========================
// Endpoints
// ========================

const MY_BLOGS: &str = "/blog/my-blogs";
const BLOG: &str = "/blog";
const SUBMIT_FOR_APPROVAL: &str = "/blog/submit-for-approval";

// ========================
// Response Envelopes
// ========================

/// The list endpoint wraps its payload twice: an outer `data` object from
/// the response envelope, an inner `data` array holding the records.
#[derive(Debug, Deserialize)]
struct MyBlogsRsp {
    data: BlogPage,
}

#[derive(Debug, Deserialize)]
struct BlogPage {
    data: Vec<Blog>,
}

// ========================
// Calls
// ========================

/// Fetch every story belonging to the signed-in author.
pub async fn my_blogs() -> Result<Vec<Blog>, ApiError> {
    debug!("fetching the author's stories");
    let rsp = Request::get(MY_BLOGS)
        .query([("userOnly", "true")])
        .send()
        .await?;
    let envelope = error_for_status(rsp)?.json::<MyBlogsRsp>().await?;
    let blogs = envelope.data.data;
    debug!("loaded {} stories", blogs.len());
    Ok(blogs)
}

/// Delete a story outright. The backend refuses published stories, so the
/// row menu never offers this for them.
pub async fn delete_blog(id: &str) -> Result<(), ApiError> {
    debug!(id, "deleting story");
    let rsp = Request::delete(&format!("{BLOG}/{id}")).send().await?;
    error_for_status(rsp)?;
    Ok(())
}

/// Move a draft into the editors' review queue.
pub async fn submit_for_approval(id: &str) -> Result<(), ApiError> {
    debug!(id, "submitting story for approval");
    let rsp = Request::put(&format!("{SUBMIT_FOR_APPROVAL}/{id}"))
        .send()
        .await?;
    error_for_status(rsp)?;
    Ok(())
}
