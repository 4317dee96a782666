use serde::{Deserialize, Serialize};
use std::env;

/// Store connection settings read from the environment.
///
/// Values may legitimately be absent: presence is validated per request by
/// the handlers, so a misdeployed process answers every request with a 500
/// naming the missing variable instead of crash-looping at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub region: Option<String>,
    pub projects_table: Option<String>,
    pub tasks_table: Option<String>,
}

pub const REGION_VAR: &str = "AWS_REGION";
pub const PROJECTS_TABLE_VAR: &str = "PROJECTS_TABLE_NAME";
pub const TASKS_TABLE_VAR: &str = "TASKS_TABLE_NAME";

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup. Empty values count
    /// as absent, matching how a blank env var behaves in deployment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            region: read(REGION_VAR),
            projects_table: read(PROJECTS_TABLE_VAR),
            tasks_table: read(TASKS_TABLE_VAR),
        }
    }
}

/// Listen port for the HTTP server. Startup-only, not request-validated.
pub fn listen_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000)
}
