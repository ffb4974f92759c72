//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. The error is rendered as a JSON
//! body of the form `{"error": "<message>"}` with a status code derived from
//! the variant.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::utils::db_error::is_unique_violation;

/// Message returned to clients for any storage or unexpected failure.
pub const GENERIC_SERVER_ERROR: &str = "Server error";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by services and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid input (missing URL, code too long, malformed body). Maps to 400.
    #[error("{message}")]
    Validation { message: String },

    /// Unknown short code. Maps to 404.
    #[error("{message}")]
    NotFound { message: String },

    /// The short code is already taken. Maps to 409.
    #[error("{message}")]
    Conflict { message: String },

    /// Storage or unexpected failure. Maps to 500.
    ///
    /// The message is logged but never sent to the client.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to expose to clients.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message } => message,
            AppError::Internal { .. } => GENERIC_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message } = &self {
            error!(error = %message, "Request failed with internal error");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.public_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation(&e) {
            return AppError::conflict("Code exists");
        }

        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}
