//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its stored URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Request Flow
///
/// 1. Look up the link by code
/// 2. Atomically increment its click counter and last-click time
/// 3. Return `302 Found` with `Location` set to the stored URL, unmodified
///
/// A failure in step 2 is logged and counted but does not prevent the redirect.
///
/// # Errors
///
/// Returns 404 Not Found with `{"error": "Link not found"}` if the code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state.redirect_service.resolve(&code).await?;

    let location = HeaderValue::try_from(url.as_str()).map_err(|e| {
        AppError::internal(format!("Stored URL for {code} is not a valid header: {e}"))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
