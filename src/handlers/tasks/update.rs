// handlers/tasks/update.rs - PUT /projects/:project_id/tasks/:task_id
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use chrono::Utc;

use crate::api::response::HttpResponse;
use crate::auth;
use crate::error::ApiError;
use crate::handlers::validate::{self, StoreTable};
use crate::models::{Task, TaskBody};
use crate::state::AppState;

/// PUT /projects/:project_id/tasks/:task_id - whole-record replace.
///
/// Every server-owned field is reasserted: id and projectId from the path,
/// adminId and createdBy from the caller identity, dateTime from the server
/// clock. Client-supplied values for those fields are discarded. The write
/// is unconditional; an unknown id is created rather than rejected.
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, ApiError> {
    validate::require_store_env(&state.settings, StoreTable::Tasks)?;
    let account_id = auth::require_account_id(&headers)?;
    validate::require_path_id(&project_id, "Project id")?;
    validate::require_path_id(&task_id, "Task id")?;
    let body: TaskBody = validate::parse_body(&body)?;

    let task = Task {
        id: task_id,
        project_id,
        admin_id: account_id.clone(),
        title: body.title,
        description: body.description,
        state: body.state,
        date_time: Utc::now(),
        created_by: account_id,
    };

    state.tasks.update(&task).await?;

    Ok(HttpResponse::updated())
}
