// handlers/tasks/list.rs - GET /projects/:project_id/tasks
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;

use crate::api::response::HttpResponse;
use crate::auth;
use crate::error::ApiError;
use crate::handlers::validate::{self, StoreTable};
use crate::state::AppState;

/// GET /projects/:project_id/tasks - list the tasks of a project.
///
/// The scan key is the project id: every task under the project is
/// returned regardless of which identity created it.
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    validate::require_store_env(&state.settings, StoreTable::Tasks)?;
    auth::require_account_id(&headers)?;
    validate::require_path_id(&project_id, "Project id")?;

    let tasks = state.tasks.list_by_owner(&project_id).await?;
    Ok(HttpResponse::ok(&tasks))
}
