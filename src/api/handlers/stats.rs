//! Handler for per-link click statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count and last click time of a link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "code": "abc",
///   "url": "https://example.com",
///   "clicks": 3,
///   "last_clicked": "2025-01-02T03:04:05Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}
