// HTTP API error types.
use axum::response::{IntoResponse, Response};

use crate::api::response::{respond, ResponseKind};
use crate::repository::RepositoryError;

/// Terminal failure states of the request pipeline.
///
/// Each variant maps to exactly one response kind. Reads that fail the
/// ownership check use `NotFound` with no body so a non-owner cannot tell a
/// foreign record from an absent one; deletes use `Unauthorized` with a
/// message. That asymmetry is part of the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found, deliberately bodiless
    NotFound,

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found() -> Self {
        ApiError::NotFound
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn kind(&self) -> ResponseKind {
        match self {
            ApiError::BadRequest(_) => ResponseKind::BadRequest,
            ApiError::Unauthorized(_) => ResponseKind::Unauthorized,
            ApiError::NotFound => ResponseKind::NotFound,
            ApiError::InternalServerError(_) => ResponseKind::InternalServerError,
        }
    }

    /// Client-facing message, if this error carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::InternalServerError(msg) => Some(msg),
            ApiError::NotFound => None,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        // The store's message is surfaced verbatim; log it here so every
        // handler gets the trace without repeating itself.
        tracing::error!(error = %err, "store request failed");
        ApiError::internal_server_error(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "{}", msg),
            None => write!(f, "not found"),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for axum.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        respond(self.kind(), self.message())
    }
}
