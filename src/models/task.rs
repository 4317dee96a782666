use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repository::Document;

/// A task record, scoped to its owning project.
///
/// `id`, `projectId`, `adminId`, `dateTime` and `createdBy` are all
/// server-assigned: the project id comes from the request path and the
/// identity/timestamp fields from the verified caller context, on create and
/// on update alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub admin_id: String,
    pub title: String,
    pub description: String,
    pub state: String,
    pub date_time: DateTime<Utc>,
    pub created_by: String,
}

/// Client-supplied mutable fields for task create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskBody {
    pub title: String,
    pub description: String,
    pub state: String,
}

impl Document for Task {
    // Tasks are listed per project, not per admin.
    const OWNER_ATTRIBUTE: &'static str = "projectId";

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_key(&self) -> &str {
        &self.project_id
    }
}
