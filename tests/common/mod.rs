#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

use project_manager_api::auth::IDENTITY_SUB_HEADER;
use project_manager_api::config::Settings;
use project_manager_api::models::{Project, Task};
use project_manager_api::repository::memory::InMemoryRepository;
use project_manager_api::repository::{Document, RepositoryError, ResourceRepository};
use project_manager_api::state::AppState;

pub const TEST_ADMIN: &str = "test-admin-id";
pub const OTHER_ADMIN: &str = "different-admin-id";

/// Repository double: the in-memory backend plus per-method call counters
/// and failure injection, so tests can assert which store calls a handler
/// made (or that it made none).
pub struct TestRepository<R> {
    inner: InMemoryRepository<R>,
    failure: Mutex<Option<String>>,
    pub gets: AtomicUsize,
    pub lists: AtomicUsize,
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
    pub deletes: AtomicUsize,
}

impl<R: Document> TestRepository<R> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryRepository::new(),
            failure: Mutex::new(None),
            gets: AtomicUsize::new(0),
            lists: AtomicUsize::new(0),
            creates: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
        })
    }

    /// Every subsequent store call fails with this message.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Total store calls observed, across all methods.
    pub fn calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
            + self.lists.load(Ordering::SeqCst)
            + self.creates.load(Ordering::SeqCst)
            + self.updates.load(Ordering::SeqCst)
            + self.deletes.load(Ordering::SeqCst)
    }

    /// Seeds a record directly, without touching the counters.
    pub async fn seed(&self, record: &R) {
        self.inner.create(record).await.unwrap();
    }

    /// Reads a record directly, without touching the counters.
    pub async fn stored(&self, id: &str) -> Option<R> {
        self.inner.get(id).await.unwrap()
    }

    /// Snapshot of every stored record, without touching the counters.
    pub async fn stored_all(&self) -> Vec<R> {
        self.inner.all()
    }

    fn check_failure(&self) -> Result<(), RepositoryError> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(RepositoryError::store(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<R: Document> ResourceRepository<R> for TestRepository<R> {
    async fn get(&self, id: &str) -> Result<Option<R>, RepositoryError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.inner.get(id).await
    }

    async fn list_by_owner(&self, owner_key: &str) -> Result<Vec<R>, RepositoryError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.inner.list_by_owner(owner_key).await
    }

    async fn create(&self, record: &R) -> Result<(), RepositoryError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.inner.create(record).await
    }

    async fn update(&self, record: &R) -> Result<(), RepositoryError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.inner.update(record).await
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.inner.delete(id).await
    }
}

pub struct TestApp {
    pub router: Router,
    pub projects: Arc<TestRepository<Project>>,
    pub tasks: Arc<TestRepository<Task>>,
}

/// Settings with every store variable present, the common case.
pub fn configured_settings() -> Settings {
    Settings {
        region: Some("eu-west-1".to_string()),
        projects_table: Some("project-table".to_string()),
        tasks_table: Some("task-table".to_string()),
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(configured_settings())
}

pub fn spawn_app_with(settings: Settings) -> TestApp {
    let projects = TestRepository::new();
    let tasks = TestRepository::new();

    let state = AppState::new(settings, projects.clone(), tasks.clone());

    TestApp {
        router: project_manager_api::app(state),
        projects,
        tasks,
    }
}

/// A request carrying the gateway-forwarded identity claim.
pub fn authed(method: &str, uri: &str, identity: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(IDENTITY_SUB_HEADER, identity);

    match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// A request with no identity claim at all.
pub fn anonymous(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// A request whose body is a raw string rather than JSON.
pub fn authed_raw(method: &str, uri: &str, identity: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(IDENTITY_SUB_HEADER, identity)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, String) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Decodes a JSON string body (error messages are serialized strings).
pub fn message(body: &str) -> String {
    serde_json::from_str(body).unwrap()
}

pub fn project(id: &str, admin_id: &str) -> Project {
    Project {
        id: id.to_string(),
        admin_id: admin_id.to_string(),
        name: "Test project".to_string(),
        description: "Test description".to_string(),
    }
}

pub fn task(id: &str, project_id: &str, admin_id: &str) -> Task {
    Task {
        id: id.to_string(),
        project_id: project_id.to_string(),
        admin_id: admin_id.to_string(),
        title: "Test task".to_string(),
        description: "Test description".to_string(),
        state: "open".to_string(),
        date_time: Utc::now(),
        created_by: admin_id.to_string(),
    }
}
