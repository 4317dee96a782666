// handlers/tasks/create.rs - POST /projects/:project_id/tasks
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use chrono::Utc;
use uuid::Uuid;

use crate::api::response::HttpResponse;
use crate::auth;
use crate::error::ApiError;
use crate::handlers::validate::{self, StoreTable};
use crate::models::{Task, TaskBody};
use crate::state::AppState;

/// POST /projects/:project_id/tasks - create a task under a project.
///
/// The owning project comes from the path, never the body; ownership and
/// attribution come from the caller identity; the timestamp is server time.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, ApiError> {
    validate::require_store_env(&state.settings, StoreTable::Tasks)?;
    let account_id = auth::require_account_id(&headers)?;
    validate::require_path_id(&project_id, "Project id")?;
    let body: TaskBody = validate::parse_body(&body)?;

    let task = Task {
        id: Uuid::new_v4().to_string(),
        project_id,
        admin_id: account_id.clone(),
        title: body.title,
        description: body.description,
        state: body.state,
        date_time: Utc::now(),
        created_by: account_id,
    };

    state.tasks.create(&task).await?;

    tracing::info!(task_id = %task.id, project_id = %task.project_id, "task created");
    Ok(HttpResponse::created())
}
