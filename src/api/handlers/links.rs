//! Handlers for link management endpoints (list, create, fetch, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, DeleteResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link, newest first.
///
/// # Endpoint
///
/// `GET /links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "customCode": "promo"   // optional
/// }
/// ```
///
/// Without `customCode` a random 6-character alphanumeric code is generated.
///
/// # Errors
///
/// - 400 `URL required` / `Invalid URL format` / `Code too long`, or a malformed body
/// - 409 `Code exists`
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Json(payload) = payload?;

    let url = payload
        .required_url()
        .ok_or_else(|| AppError::bad_request("URL required"))?
        .to_string();

    payload.validate()?;

    // The URL parser silently drops tab and newline characters, but a stored
    // URL must remain usable as a `Location` header value.
    if url.chars().any(char::is_control) {
        return Err(AppError::bad_request("Invalid URL format"));
    }

    let link = state
        .link_service
        .create_link(url, payload.custom_code)
        .await?;

    Ok(Json(link.into()))
}

/// Fetches a single link.
///
/// # Endpoint
///
/// `GET /links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}

/// Permanently deletes a link.
///
/// # Endpoint
///
/// `DELETE /links/{code}`
///
/// # Response
///
/// ```json
/// { "success": true }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(DeleteResponse { success: true }))
}
