use serde::{Deserialize, Serialize};

use crate::repository::Document;

/// A project record as stored and served.
///
/// `id` and `adminId` are server-assigned: the id is generated on creation
/// and the owner is taken from the verified caller identity on every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub admin_id: String,
    pub name: String,
    pub description: String,
}

/// Client-supplied mutable fields for project create and update.
///
/// Anything else in the request body (a forged `adminId`, an `id`) is
/// dropped on the floor; the handlers reassert those fields from server-side
/// context.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectBody {
    pub name: String,
    pub description: String,
}

impl Document for Project {
    const OWNER_ATTRIBUTE: &'static str = "adminId";

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_key(&self) -> &str {
        &self.admin_id
    }
}
