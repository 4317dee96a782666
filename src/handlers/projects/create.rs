// handlers/projects/create.rs - POST /projects
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use uuid::Uuid;

use crate::api::response::HttpResponse;
use crate::auth;
use crate::error::ApiError;
use crate::handlers::validate::{self, StoreTable};
use crate::models::{Project, ProjectBody};
use crate::state::AppState;

/// POST /projects - create a project owned by the caller.
///
/// The id is generated server-side and the owner comes from the verified
/// identity; neither can be supplied by the client.
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, ApiError> {
    validate::require_store_env(&state.settings, StoreTable::Projects)?;
    let account_id = auth::require_account_id(&headers)?;
    let body: ProjectBody = validate::parse_body(&body)?;

    let project = Project {
        id: Uuid::new_v4().to_string(),
        admin_id: account_id,
        name: body.name,
        description: body.description,
    };

    state.projects.create(&project).await?;

    tracing::info!(project_id = %project.id, "project created");
    Ok(HttpResponse::created())
}
