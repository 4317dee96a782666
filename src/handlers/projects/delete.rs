// handlers/projects/delete.rs - DELETE /projects/:project_id
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;

use crate::api::response::HttpResponse;
use crate::auth;
use crate::error::ApiError;
use crate::handlers::validate::{self, StoreTable};
use crate::state::AppState;

/// DELETE /projects/:project_id - delete one of the caller's projects.
///
/// Unlike reads, a failed ownership check here answers 401 with a message;
/// an absent record takes the same branch. Tasks under the project are left
/// in place. The ownership read and the delete are sequential, not
/// transactional.
pub async fn delete(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    validate::require_store_env(&state.settings, StoreTable::Projects)?;
    let account_id = auth::require_account_id(&headers)?;
    validate::require_path_id(&project_id, "Project id")?;

    match state.projects.get(&project_id).await? {
        Some(project) if project.admin_id == account_id => {
            state.projects.delete(&project_id).await?;
            tracing::info!(project_id = %project_id, "project deleted");
            Ok(HttpResponse::accepted())
        }
        _ => Err(ApiError::unauthorized(
            "Unauthorized to remove this project as you do not belong to this project",
        )),
    }
}
