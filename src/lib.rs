pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod state;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Builds the full router over the given state. Kept in the library so
/// integration tests can drive the service in-process.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Resource API (identity supplied by the upstream gateway)
        .merge(project_routes())
        .merge(task_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn project_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::projects;

    Router::new()
        .route("/projects", post(projects::create).get(projects::list))
        .route(
            "/projects/:project_id",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
}

fn task_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::tasks;

    Router::new()
        .route(
            "/projects/:project_id/tasks",
            post(tasks::create).get(tasks::list),
        )
        .route(
            "/projects/:project_id/tasks/:task_id",
            get(tasks::get).put(tasks::update).delete(tasks::delete),
        )
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Project Manager API",
        "version": version,
        "endpoints": {
            "projects": "/projects [POST, GET], /projects/:project_id [GET, PUT, DELETE]",
            "tasks": "/projects/:project_id/tasks [POST, GET], /projects/:project_id/tasks/:task_id [GET, PUT, DELETE]",
            "health": "/health (public)",
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
