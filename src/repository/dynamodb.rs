//! DynamoDB implementation of [`ResourceRepository`].
//!
//! One logical table per resource type, keyed by the `id` attribute.
//! Records are stored as flat items: each field of the record's camelCase
//! JSON form becomes one attribute. `list_by_owner` is a full-table `Scan`
//! with an equality `FilterExpression` on the owner attribute — the table
//! has no secondary index on that field, so correctness (not efficiency) is
//! the contract, and the scan follows `LastEvaluatedKey` pagination so it
//! holds at any table size.

use std::collections::HashMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::{Number, Value};

use super::{Document, RepositoryError, ResourceRepository};

pub struct DynamoRepository<R> {
    client: Client,
    table_name: String,
    _marker: PhantomData<fn() -> R>,
}

impl<R> DynamoRepository<R> {
    /// The table must already exist; provisioning is infrastructure's job.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            _marker: PhantomData,
        }
    }
}

/// Maps an SDK failure to a repository error carrying the store's message.
fn map_sdk_error(err: impl std::error::Error + Send + Sync + 'static) -> RepositoryError {
    RepositoryError::store(
        aws_sdk_dynamodb::error::DisplayErrorContext(&err).to_string(),
    )
}

#[async_trait]
impl<R: Document> ResourceRepository<R> for DynamoRepository<R> {
    async fn get(&self, id: &str) -> Result<Option<R>, RepositoryError> {
        let response = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_sdk_error)?;

        match response.item() {
            Some(item) => Ok(Some(from_item(item)?)),
            None => Ok(None),
        }
    }

    async fn list_by_owner(&self, owner_key: &str) -> Result<Vec<R>, RepositoryError> {
        let mut records = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let response = self
                .client
                .scan()
                .table_name(&self.table_name)
                .filter_expression("#owner = :owner")
                .expression_attribute_names("#owner", R::OWNER_ATTRIBUTE)
                .expression_attribute_values(":owner", AttributeValue::S(owner_key.to_string()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_sdk_error)?;

            for item in response.items() {
                records.push(from_item(item)?);
            }

            match response.last_evaluated_key() {
                Some(key) => start_key = Some(key.clone()),
                None => break,
            }
        }

        Ok(records)
    }

    async fn create(&self, record: &R) -> Result<(), RepositoryError> {
        self.put(record).await
    }

    async fn update(&self, record: &R) -> Result<(), RepositoryError> {
        self.put(record).await
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }
}

impl<R: Document> DynamoRepository<R> {
    // Create and update are both unconditional PutItem calls; the split
    // exists at the trait level because the contract differs in intent, not
    // in wire behavior.
    async fn put(&self, record: &R) -> Result<(), RepositoryError> {
        let item = to_item(record)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }
}

/// Marshals a record into its flat attribute map, one attribute per field
/// of the record's JSON form.
pub fn to_item<R: Document>(record: &R) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    let value = serde_json::to_value(record)
        .map_err(|e| RepositoryError::store(format!("failed to serialize record: {e}")))?;

    match value {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(name, field)| (name, to_attribute(field)))
            .collect()),
        _ => Err(RepositoryError::store(
            "record did not serialize to an object",
        )),
    }
}

/// Unmarshals an attribute map back into a record.
pub fn from_item<R: Document>(
    item: &HashMap<String, AttributeValue>,
) -> Result<R, RepositoryError> {
    let map = item
        .iter()
        .map(|(name, attr)| (name.clone(), from_attribute(attr)))
        .collect();

    serde_json::from_value(Value::Object(map))
        .map_err(|e| RepositoryError::store(format!("failed to deserialize record: {e}")))
}

fn to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(items) => AttributeValue::L(items.into_iter().map(to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.into_iter()
                .map(|(name, field)| (name, to_attribute(field)))
                .collect(),
        ),
    }
}

fn from_attribute(attr: &AttributeValue) -> Value {
    match attr {
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::N(n) => n
            .parse::<Number>()
            .map(Value::Number)
            .unwrap_or_else(|_| Value::String(n.clone())),
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::L(items) => Value::Array(items.iter().map(from_attribute).collect()),
        AttributeValue::M(map) => Value::Object(
            map.iter()
                .map(|(name, field)| (name.clone(), from_attribute(field)))
                .collect(),
        ),
        // Binary and set attributes never occur in these tables.
        other => Value::String(format!("{other:?}")),
    }
}
