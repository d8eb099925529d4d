//! Frontend Models
//!
//! Wire types matching backend entities. Status and category codes travel as
//! stable small integers; unknown codes are rejected at decode time so a bad
//! response never reaches the table renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Blog post record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub category_id: BlogCategory,
    pub status: BlogStatus,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle state of a blog post (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BlogStatus {
    Draft = 0,
    Pending = 1,
    Approved = 2,
    Published = 3,
}

impl BlogStatus {
    /// Every status, in declared order. The filter checkbox row and the
    /// initial filter set are generated from this table.
    pub const ALL: &'static [BlogStatus] = &[
        BlogStatus::Draft,
        BlogStatus::Pending,
        BlogStatus::Approved,
        BlogStatus::Published,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BlogStatus::Draft => "Draft",
            BlogStatus::Pending => "Pending",
            BlogStatus::Approved => "Approved",
            BlogStatus::Published => "Published",
        }
    }

    /// CSS class for the status badge in the stories table.
    pub fn badge_class(self) -> &'static str {
        match self {
            BlogStatus::Draft => "status-badge draft",
            BlogStatus::Pending => "status-badge pending",
            BlogStatus::Approved => "status-badge approved",
            BlogStatus::Published => "status-badge published",
        }
    }
}

impl From<BlogStatus> for u8 {
    fn from(status: BlogStatus) -> u8 {
        status as u8
    }
}

impl TryFrom<u8> for BlogStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BlogStatus::Draft),
            1 => Ok(BlogStatus::Pending),
            2 => Ok(BlogStatus::Approved),
            3 => Ok(BlogStatus::Published),
            other => Err(format!("unknown blog status code {other}")),
        }
    }
}

/// Topical classification of a blog post (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BlogCategory {
    Editorial = 0,
    News = 1,
    Culture = 2,
    Sports = 3,
    Technology = 4,
    Opinion = 5,
    Photostory = 6,
}

impl BlogCategory {
    pub fn label(self) -> &'static str {
        match self {
            BlogCategory::Editorial => "Editorial",
            BlogCategory::News => "News",
            BlogCategory::Culture => "Culture",
            BlogCategory::Sports => "Sports",
            BlogCategory::Technology => "Technology",
            BlogCategory::Opinion => "Opinion",
            BlogCategory::Photostory => "Photostory",
        }
    }
}

impl From<BlogCategory> for u8 {
    fn from(category: BlogCategory) -> u8 {
        category as u8
    }
}

impl TryFrom<u8> for BlogCategory {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BlogCategory::Editorial),
            1 => Ok(BlogCategory::News),
            2 => Ok(BlogCategory::Culture),
            3 => Ok(BlogCategory::Sports),
            4 => Ok(BlogCategory::Technology),
            5 => Ok(BlogCategory::Opinion),
            6 => Ok(BlogCategory::Photostory),
            other => Err(format!("unknown blog category code {other}")),
        }
    }
}
