//! Management API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler, stats_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Link management routes.
///
/// # Endpoints
///
/// - `GET    /links`          - List all links, newest first
/// - `POST   /links`          - Create a link (generated or custom code)
/// - `GET    /links/{code}`   - Fetch one link
/// - `DELETE /links/{code}`   - Delete a link
/// - `GET    /stats/{code}`   - Click count and last click of a link
pub fn management_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .route("/stats/{code}", get(stats_handler))
}
