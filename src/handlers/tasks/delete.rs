// handlers/tasks/delete.rs - DELETE /projects/:project_id/tasks/:task_id
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;

use crate::api::response::HttpResponse;
use crate::auth;
use crate::error::ApiError;
use crate::handlers::validate::{self, StoreTable};
use crate::state::AppState;

/// DELETE /projects/:project_id/tasks/:task_id - delete one of the
/// caller's tasks. Ownership failure (or an absent record) answers 401,
/// mirroring the project delete rather than the read handlers.
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    validate::require_store_env(&state.settings, StoreTable::Tasks)?;
    let account_id = auth::require_account_id(&headers)?;
    validate::require_path_id(&project_id, "Project id")?;
    validate::require_path_id(&task_id, "Task id")?;

    match state.tasks.get(&task_id).await? {
        Some(task) if task.admin_id == account_id => {
            state.tasks.delete(&task_id).await?;
            tracing::info!(task_id = %task_id, "task deleted");
            Ok(HttpResponse::accepted())
        }
        _ => Err(ApiError::unauthorized(
            "Unauthorized to remove this task as you do not belong to this project",
        )),
    }
}
