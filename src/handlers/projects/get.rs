// handlers/projects/get.rs - GET /projects/:project_id
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;

use crate::api::response::HttpResponse;
use crate::auth;
use crate::error::ApiError;
use crate::handlers::validate::{self, StoreTable};
use crate::state::AppState;

/// GET /projects/:project_id - fetch one of the caller's projects.
pub async fn get(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    validate::require_store_env(&state.settings, StoreTable::Projects)?;
    let account_id = auth::require_account_id(&headers)?;
    validate::require_path_id(&project_id, "Project id")?;

    match state.projects.get(&project_id).await? {
        Some(project) if project.admin_id == account_id => Ok(HttpResponse::ok(&project)),
        // A foreign project must be indistinguishable from an absent one.
        _ => Err(ApiError::not_found()),
    }
}
