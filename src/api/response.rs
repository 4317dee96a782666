// HTTP response construction for the API surface.
//
// Every handler outcome, success or failure, funnels through `respond` so
// the status/body contract lives in one place. A response always comes back:
// serialization problems degrade to a 500, never a panic.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// The recognized response kinds and their status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Ok,
    Created,
    Accepted,
    Updated,
    BadRequest,
    Unauthorized,
    NotFound,
    InternalServerError,
}

impl ResponseKind {
    pub const fn status(self) -> StatusCode {
        match self {
            ResponseKind::Ok => StatusCode::OK,
            ResponseKind::Created => StatusCode::CREATED,
            ResponseKind::Accepted => StatusCode::ACCEPTED,
            ResponseKind::Updated => StatusCode::NO_CONTENT,
            ResponseKind::BadRequest => StatusCode::BAD_REQUEST,
            ResponseKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ResponseKind::NotFound => StatusCode::NOT_FOUND,
            ResponseKind::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Maps a response kind and an optional body to a transport response.
///
/// An omitted body produces an empty response body; a present body is
/// serialized as JSON (a record, a list of records, or a plain message
/// string depending on the operation).
pub fn respond<T: Serialize + ?Sized>(kind: ResponseKind, body: Option<&T>) -> Response {
    let status = kind.status();
    match body {
        Some(body) => (status, Json(body)).into_response(),
        None => status.into_response(),
    }
}

/// Per-kind constructors, so handlers read as `HttpResponse::created()`.
pub struct HttpResponse;

impl HttpResponse {
    pub fn ok<T: Serialize + ?Sized>(body: &T) -> Response {
        respond(ResponseKind::Ok, Some(body))
    }

    pub fn created() -> Response {
        respond::<()>(ResponseKind::Created, None)
    }

    pub fn accepted() -> Response {
        respond::<()>(ResponseKind::Accepted, None)
    }

    pub fn updated() -> Response {
        respond::<()>(ResponseKind::Updated, None)
    }
}
