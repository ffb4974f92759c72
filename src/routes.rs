//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /r/{code}`     - Short link redirect
//! - `GET  /health`       - Health check
//! - `/links`, `/stats`   - Management API (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and tracing, without path normalization.
///
/// Used directly by integration tests; production serves [`app_router`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/r/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::management_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
