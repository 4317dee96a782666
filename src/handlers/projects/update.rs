// handlers/projects/update.rs - PUT /projects/:project_id
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;

use crate::api::response::HttpResponse;
use crate::auth;
use crate::error::ApiError;
use crate::handlers::validate::{self, StoreTable};
use crate::models::{Project, ProjectBody};
use crate::state::AppState;

/// PUT /projects/:project_id - whole-record replace.
///
/// The id comes from the path and the owner from the caller identity,
/// overriding anything the body may claim. The write is unconditional: an
/// unknown id is created rather than rejected.
pub async fn update(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, ApiError> {
    validate::require_store_env(&state.settings, StoreTable::Projects)?;
    let account_id = auth::require_account_id(&headers)?;
    validate::require_path_id(&project_id, "Project id")?;
    let body: ProjectBody = validate::parse_body(&body)?;

    let project = Project {
        id: project_id,
        admin_id: account_id,
        name: body.name,
        description: body.description,
    };

    state.projects.update(&project).await?;

    Ok(HttpResponse::updated())
}
