use std::sync::Arc;

use project_manager_api::config::{self, Settings};
use project_manager_api::models::{Project, Task};
use project_manager_api::repository::dynamodb::DynamoRepository;
use project_manager_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up AWS_REGION and the table
    // names without exporting them by hand.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let settings = Settings::from_env();

    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = settings.region.clone() {
        loader = loader.region(aws_config::Region::new(region));
    }
    let sdk_config = loader.load().await;
    let client = aws_sdk_dynamodb::Client::new(&sdk_config);

    // Missing settings are tolerated here: the handlers validate them on
    // every request and answer 500 naming the variable, so an unconfigured
    // repository is constructed but never called.
    let projects = Arc::new(DynamoRepository::<Project>::new(
        client.clone(),
        settings.projects_table.clone().unwrap_or_default(),
    ));
    let tasks = Arc::new(DynamoRepository::<Task>::new(
        client,
        settings.tasks_table.clone().unwrap_or_default(),
    ));

    let state = AppState::new(settings, projects, tasks);
    let app = project_manager_api::app(state);

    let port = config::listen_port();
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Project Manager API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
