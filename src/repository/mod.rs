//! Ownership-scoped storage access, one repository per resource type.
//!
//! Handlers hold a repository as an injected capability
//! (`Arc<dyn ResourceRepository<_>>`), so the production DynamoDB backend
//! and the in-memory backend are interchangeable without touching handler
//! code. Cascade policies (none exist today: deleting a project leaves its
//! tasks in place) would also belong behind this seam.

pub mod dynamodb;
pub mod memory;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A store or transport failure, carrying the store's own message.
///
/// Handlers surface the message verbatim in a 500 response. There is no
/// retry and no partial-failure state: each operation is a single request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Store(String),
}

impl RepositoryError {
    pub fn store(message: impl Into<String>) -> Self {
        RepositoryError::Store(message.into())
    }
}

/// A flat record living in a single table, keyed by an opaque id, with one
/// attribute that owner-scoped list scans filter on.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Attribute name the `list_by_owner` predicate scan compares against.
    const OWNER_ATTRIBUTE: &'static str;

    fn id(&self) -> &str;

    /// Value of [`Self::OWNER_ATTRIBUTE`] for this record.
    fn owner_key(&self) -> &str;
}

/// Storage contract shared by every resource type.
#[async_trait]
pub trait ResourceRepository<R>: Send + Sync {
    /// Point lookup by primary identifier. Absence is not an error.
    async fn get(&self, id: &str) -> Result<Option<R>, RepositoryError>;

    /// All records whose owner attribute equals `owner_key`. Unordered; an
    /// empty result is a valid outcome, not an error.
    async fn list_by_owner(&self, owner_key: &str) -> Result<Vec<R>, RepositoryError>;

    /// Unconditional upsert by the record's own id. A colliding id silently
    /// overwrites the existing record.
    async fn create(&self, record: &R) -> Result<(), RepositoryError>;

    /// Unconditional full overwrite. Updating an unknown id creates it.
    async fn update(&self, record: &R) -> Result<(), RepositoryError>;

    /// Unconditional delete. Deleting an unknown id is not an error.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
