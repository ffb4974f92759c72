//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `links` table.
///
/// The store is the single shared mutable resource: implementations must
/// enforce code uniqueness themselves and apply click increments atomically.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `clicks = 0`, `last_clicked = NULL`, `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists, including when
    /// a concurrent insert of the same code wins the race.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Permanently deletes a link.
    ///
    /// Returns `Ok(false)` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically increments `clicks` and sets `last_clicked` to now.
    ///
    /// The increment is evaluated by the store in a single statement so that
    /// concurrent calls for the same code never lose updates.
    ///
    /// Returns `Ok(false)` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_click(&self, code: &str) -> Result<bool, AppError>;

    /// Counts links and sums their clicks: `(links, clicks)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn totals(&self) -> Result<(i64, i64), AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
