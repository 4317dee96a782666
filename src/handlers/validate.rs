//! Ordered request validation shared by every handler.
//!
//! The pipeline order is fixed: store environment, then identity, then path
//! identifiers, then body. Each check short-circuits, and each later check
//! may assume the earlier ones passed. The identity step lives in
//! [`crate::auth`]; the rest is here.

use serde::de::DeserializeOwned;

use crate::config::{Settings, PROJECTS_TABLE_VAR, REGION_VAR, TASKS_TABLE_VAR};
use crate::error::ApiError;

/// Which resource table an operation is about to touch.
#[derive(Debug, Clone, Copy)]
pub enum StoreTable {
    Projects,
    Tasks,
}

/// Checks that the store region and the operation's table name are
/// configured. Runs before anything else so a misdeployment never reaches
/// the store.
pub fn require_store_env(settings: &Settings, table: StoreTable) -> Result<(), ApiError> {
    if settings.region.is_none() {
        return Err(missing_env(REGION_VAR));
    }

    let (value, var) = match table {
        StoreTable::Projects => (&settings.projects_table, PROJECTS_TABLE_VAR),
        StoreTable::Tasks => (&settings.tasks_table, TASKS_TABLE_VAR),
    };

    if value.is_none() {
        return Err(missing_env(var));
    }

    Ok(())
}

fn missing_env(var: &str) -> ApiError {
    let message = format!("{var} was not specified in the environment variables");
    tracing::error!("{message}");
    ApiError::internal_server_error(message)
}

/// Checks a path identifier is present. The router only matches non-empty
/// segments, but the contract is validated here rather than assumed.
pub fn require_path_id(value: &str, name: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        let message = format!("{name} cannot be empty");
        tracing::error!("{message}");
        return Err(ApiError::bad_request(message));
    }
    Ok(())
}

/// Checks the body is present and parses as the operation's shape. Field-
/// level detail is not reported; a malformed body is a generic bad request.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        tracing::error!("Request body cannot be empty");
        return Err(ApiError::bad_request("Request body cannot be empty"));
    }

    serde_json::from_str(body).map_err(|err| {
        tracing::error!(error = %err, "invalid request body");
        ApiError::bad_request("Invalid request body")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectBody;

    fn settings(region: Option<&str>, projects: Option<&str>, tasks: Option<&str>) -> Settings {
        Settings {
            region: region.map(String::from),
            projects_table: projects.map(String::from),
            tasks_table: tasks.map(String::from),
        }
    }

    #[test]
    fn missing_region_names_the_variable() {
        let err = require_store_env(
            &settings(None, Some("project-table"), None),
            StoreTable::Projects,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ApiError::internal_server_error(
                "AWS_REGION was not specified in the environment variables"
            )
        );
    }

    #[test]
    fn missing_table_names_the_variable_per_resource() {
        let err = require_store_env(&settings(Some("eu-west-1"), None, None), StoreTable::Projects)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::internal_server_error(
                "PROJECTS_TABLE_NAME was not specified in the environment variables"
            )
        );

        let err = require_store_env(&settings(Some("eu-west-1"), None, None), StoreTable::Tasks)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::internal_server_error(
                "TASKS_TABLE_NAME was not specified in the environment variables"
            )
        );
    }

    #[test]
    fn region_is_checked_before_the_table() {
        let err = require_store_env(&settings(None, None, None), StoreTable::Tasks).unwrap_err();
        assert_eq!(
            err,
            ApiError::internal_server_error(
                "AWS_REGION was not specified in the environment variables"
            )
        );
    }

    #[test]
    fn empty_path_id_is_a_bad_request() {
        let err = require_path_id("", "Project id").unwrap_err();
        assert_eq!(err, ApiError::bad_request("Project id cannot be empty"));
        assert!(require_path_id("p-1", "Project id").is_ok());
    }

    #[test]
    fn empty_body_has_its_own_message() {
        let err = parse_body::<ProjectBody>("").unwrap_err();
        assert_eq!(err, ApiError::bad_request("Request body cannot be empty"));
    }

    #[test]
    fn malformed_or_mismatched_body_is_a_generic_bad_request() {
        let err = parse_body::<ProjectBody>("{not json").unwrap_err();
        assert_eq!(err, ApiError::bad_request("Invalid request body"));

        // Missing required field
        let err = parse_body::<ProjectBody>(r#"{"name":"x"}"#).unwrap_err();
        assert_eq!(err, ApiError::bad_request("Invalid request body"));
    }
}
