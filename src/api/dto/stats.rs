//! DTOs for the per-link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Click statistics for a single link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            url: link.url,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
        }
    }
}
