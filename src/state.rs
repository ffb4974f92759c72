//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService};
use crate::domain::repositories::LinkRepository;

/// Services shared by all request handlers.
///
/// Holds no per-request data: every request goes straight to the store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
}

impl AppState {
    /// Builds the state from explicitly constructed services.
    pub fn new(link_service: Arc<LinkService>, redirect_service: Arc<RedirectService>) -> Self {
        Self {
            link_service,
            redirect_service,
        }
    }

    /// Builds both services over one repository with default settings.
    pub fn from_repository(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self::new(
            Arc::new(LinkService::new(link_repository.clone())),
            Arc::new(RedirectService::new(link_repository)),
        )
    }
}
