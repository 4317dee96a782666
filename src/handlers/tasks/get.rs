// handlers/tasks/get.rs - GET /projects/:project_id/tasks/:task_id
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;

use crate::api::response::HttpResponse;
use crate::auth;
use crate::error::ApiError;
use crate::handlers::validate::{self, StoreTable};
use crate::state::AppState;

/// GET /projects/:project_id/tasks/:task_id - fetch one of the caller's
/// tasks. A foreign task reads as absent, same as the project handler.
pub async fn get(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    validate::require_store_env(&state.settings, StoreTable::Tasks)?;
    let account_id = auth::require_account_id(&headers)?;
    validate::require_path_id(&project_id, "Project id")?;
    validate::require_path_id(&task_id, "Task id")?;

    match state.tasks.get(&task_id).await? {
        Some(task) if task.admin_id == account_id => Ok(HttpResponse::ok(&task)),
        _ => Err(ApiError::not_found()),
    }
}
