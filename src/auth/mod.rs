//! Caller identity, as forwarded by the upstream gateway.
//!
//! Token verification happens in front of this service: the gateway
//! authenticates the caller and maps the verified subject claim onto the
//! `x-identity-sub` request header. This module only extracts that value.
//! An absent or empty claim on a request that reached a handler means the
//! gateway contract was violated, which is why the failure surfaces as a
//! 500 rather than a 401.

use axum::http::HeaderMap;

use crate::error::ApiError;

/// Header carrying the verified subject claim.
pub const IDENTITY_SUB_HEADER: &str = "x-identity-sub";

/// Extracts the caller's account id from the forwarded claim, if present.
pub fn account_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(IDENTITY_SUB_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|sub| !sub.is_empty())
        .map(str::to_string)
}

/// Extracts the caller's account id, failing closed.
pub fn require_account_id(headers: &HeaderMap) -> Result<String, ApiError> {
    account_id(headers).ok_or_else(|| {
        tracing::error!("no identity claim on request");
        ApiError::internal_server_error("Something went wrong")
    })
}
