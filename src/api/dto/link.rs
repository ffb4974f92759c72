//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// `url` is optional at the serde level so that a missing field produces a
/// `"URL required"` validation error instead of a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Destination URL; must be an absolute URL.
    #[validate(url(message = "Invalid URL format"))]
    pub url: Option<String>,

    /// Optional custom short code (any characters, at most 32 after trimming).
    #[serde(rename = "customCode", alias = "custom_code")]
    pub custom_code: Option<String>,
}

impl CreateLinkRequest {
    /// Returns the URL if present and not blank.
    pub fn required_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            url: link.url,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Body returned after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
