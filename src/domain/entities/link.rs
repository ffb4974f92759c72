//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click accounting.
///
/// `last_clicked` is `None` until the first successful redirect and is set on
/// every redirect afterwards, so it is `Some` exactly when `clicks > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        url: String,
        clicks: i64,
        last_clicked: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            url,
            clicks,
            last_clicked,
            created_at,
        }
    }

    /// Returns true if the link has been followed at least once.
    pub fn has_clicks(&self) -> bool {
        self.clicks > 0
    }
}

/// Input data for creating a new link.
///
/// Click fields are not part of creation: the store initializes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub url: String,
}
