//! Short code resolution with click accounting.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use tracing::{debug, error, warn};

/// Counter of clicks persisted by the store.
pub const CLICKS_RECORDED_METRIC: &str = "link_clicks_recorded_total";

/// Counter of redirects whose click could not be persisted.
pub const CLICK_RECORD_FAILURES_METRIC: &str = "link_click_record_failures_total";

/// Counter of redirect requests for unknown codes.
pub const REDIRECT_NOT_FOUND_METRIC: &str = "link_redirect_not_found_total";

/// Resolves short codes to their target URLs and records the click.
///
/// Lookup and click recording are two statements. The click is recorded
/// before the URL is returned, but a failure to record it never fails the
/// redirect: it is logged at `error` and counted in
/// [`CLICK_RECORD_FAILURES_METRIC`].
pub struct RedirectService {
    link_repository: Arc<dyn LinkRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Returns the stored URL for `code`, verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with `"Link not found"` if the code is unknown.
    /// Returns [`AppError::Internal`] if the lookup itself fails, or if the
    /// stored URL contains control characters and cannot be sent as a
    /// `Location` header. No click is recorded in that case.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = match self.link_repository.find_by_code(code).await? {
            Some(link) => link,
            None => {
                metrics::counter!(REDIRECT_NOT_FOUND_METRIC).increment(1);
                debug!(code = %code, "Redirect for unknown code");
                return Err(AppError::not_found("Link not found"));
            }
        };

        if link.url.chars().any(char::is_control) {
            return Err(AppError::internal(format!(
                "Stored URL for {code} contains control characters"
            )));
        }

        match self.link_repository.record_click(code).await {
            Ok(true) => {
                metrics::counter!(CLICKS_RECORDED_METRIC).increment(1);
            }
            Ok(false) => {
                metrics::counter!(CLICK_RECORD_FAILURES_METRIC).increment(1);
                warn!(code = %code, "Link deleted before click was recorded");
            }
            Err(e) => {
                metrics::counter!(CLICK_RECORD_FAILURES_METRIC).increment(1);
                error!(code = %code, error = %e, "Failed to record click");
            }
        }

        Ok(link.url)
    }
}
