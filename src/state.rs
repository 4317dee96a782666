use std::sync::Arc;

use crate::config::Settings;
use crate::models::{Project, Task};
use crate::repository::ResourceRepository;

/// Shared application state: the environment settings and one repository
/// per resource type, injected as capabilities so tests can substitute a
/// fake store. Nothing here is mutable between requests.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub projects: Arc<dyn ResourceRepository<Project>>,
    pub tasks: Arc<dyn ResourceRepository<Task>>,
}

impl AppState {
    pub fn new(
        settings: Settings,
        projects: Arc<dyn ResourceRepository<Project>>,
        tasks: Arc<dyn ResourceRepository<Task>>,
    ) -> Self {
        Self {
            settings,
            projects,
            tasks,
        }
    }
}
