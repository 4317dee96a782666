// handlers/projects/list.rs - GET /projects
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;

use crate::api::response::HttpResponse;
use crate::auth;
use crate::error::ApiError;
use crate::handlers::validate::{self, StoreTable};
use crate::state::AppState;

/// GET /projects - list the caller's projects.
///
/// An empty list is a normal 200 result.
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    validate::require_store_env(&state.settings, StoreTable::Projects)?;
    let account_id = auth::require_account_id(&headers)?;

    let projects = state.projects.list_by_owner(&account_id).await?;
    Ok(HttpResponse::ok(&projects))
}
