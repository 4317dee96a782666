//! In-memory implementation of [`ResourceRepository`].
//!
//! Same contract as the DynamoDB backend over a locked hash map: point
//! lookups by id, and `list_by_owner` as a predicate pass over every record,
//! mirroring the store's unordered full-table scan. Used for local runs
//! without AWS credentials and as the substrate for test doubles.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{Document, RepositoryError, ResourceRepository};

#[derive(Debug, Default)]
pub struct InMemoryRepository<R> {
    records: RwLock<HashMap<String, R>>,
}

impl<R> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().expect("repository lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: Clone> InMemoryRepository<R> {
    /// Snapshot of every record, in scan order (unordered).
    pub fn all(&self) -> Vec<R> {
        self.records
            .read()
            .expect("repository lock poisoned")
            .values()
            .cloned()
            .collect()
    }
}

#[async_trait]
impl<R: Document> ResourceRepository<R> for InMemoryRepository<R> {
    async fn get(&self, id: &str) -> Result<Option<R>, RepositoryError> {
        let records = self.records.read().expect("repository lock poisoned");
        Ok(records.get(id).cloned())
    }

    async fn list_by_owner(&self, owner_key: &str) -> Result<Vec<R>, RepositoryError> {
        let records = self.records.read().expect("repository lock poisoned");
        Ok(records
            .values()
            .filter(|record| record.owner_key() == owner_key)
            .cloned()
            .collect())
    }

    async fn create(&self, record: &R) -> Result<(), RepositoryError> {
        let mut records = self.records.write().expect("repository lock poisoned");
        records.insert(record.id().to_string(), record.clone());
        Ok(())
    }

    async fn update(&self, record: &R) -> Result<(), RepositoryError> {
        let mut records = self.records.write().expect("repository lock poisoned");
        records.insert(record.id().to_string(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut records = self.records.write().expect("repository lock poisoned");
        records.remove(id);
        Ok(())
    }
}
