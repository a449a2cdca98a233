//! API error types with IntoResponse
//!
//! Every failure leaves the handler as `{ "success": false, "error": ... }`
//! with the matching status code. Validation failures also list every
//! violation under `details`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use hackreg_core::models::{ValidationError, ValidationErrors};

use crate::db::repos::StoreError;
use crate::session::SessionError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload failed validation (400)
    Validation(ValidationErrors),

    /// Malformed input, or a store failure surfaced as a rejected request (400)
    BadRequest { message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Store error (500, logged)
    Store(StoreError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Report a store failure to the client as a rejected request.
    ///
    /// The hackathon and profile routes answer 400 for any lookup failure;
    /// the underlying error is logged, never echoed.
    pub fn rejected(action: &str, e: StoreError) -> Self {
        tracing::warn!(error = %e, "{} failed", action);
        Self::bad_request(format!("{} failed", action))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(errors) => {
                tracing::warn!(fields = ?errors.fields(), "rejected invalid payload");
                json!({
                    "success": false,
                    "error": errors.to_string(),
                    "details": errors.messages(),
                })
            }
            Self::BadRequest { message } => json!({
                "success": false,
                "error": message,
            }),
            Self::NotFound { resource, id } => json!({
                "success": false,
                "error": format!("{} '{}' not found", resource, id),
            }),
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!("Store error: {}", e);
                json!({
                    "success": false,
                    "error": "an internal error occurred",
                })
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                json!({
                    "success": false,
                    "error": "an internal error occurred",
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::Validation(e)
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::bad_request(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Malformed(reason) => Self::bad_request(reason),
            SessionError::Unavailable(reason) => Self::Internal { message: reason },
        }
    }
}
