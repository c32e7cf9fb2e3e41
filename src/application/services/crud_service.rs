//! Generic CRUD service shared by every resource.

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::repositories::ObjectStore;
use crate::domain::schema::{EntitySchema, ParentRelation};
use crate::error::AppError;

/// The one CRUD implementation behind all twelve resource routes.
///
/// Behavior is parameterized entirely by the [`EntitySchema`] passed to each
/// call: required fields on create, immutable fields on update, and the
/// optional parent relation for nested resources. Records are flat JSON
/// objects; beyond the schema's required fields, clients may store arbitrary
/// extra attributes.
///
/// Validation happens before any store mutation, so a rejected request never
/// leaves a side effect.
pub struct CrudService {
    store: Arc<dyn ObjectStore>,
}

impl CrudService {
    /// Creates a new CRUD service over the given store.
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Lists every record of the schema's kind.
    pub async fn list(&self, schema: &EntitySchema) -> Result<Vec<Value>, AppError> {
        Ok(self.store.all(schema.kind).await?)
    }

    /// Lists the records whose foreign key equals `parent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the parent does not exist.
    pub async fn list_children(
        &self,
        schema: &EntitySchema,
        parent_id: &str,
    ) -> Result<Vec<Value>, AppError> {
        let parent = self.require_parent(schema, parent_id).await?;

        let mut records = self.store.all(schema.kind).await?;
        records.retain(|record| {
            record.get(parent.foreign_key).and_then(Value::as_str) == Some(parent_id)
        });
        Ok(records)
    }

    /// Looks up a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record exists.
    pub async fn get(&self, schema: &EntitySchema, id: &str) -> Result<Value, AppError> {
        self.store
            .get(schema.kind, id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Creates a record from a JSON body, injecting the parent foreign key
    /// for nested resources.
    ///
    /// `id`, `created_at`, and `updated_at` are always generated server-side;
    /// client-supplied values for them are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the parent does not exist.
    /// Returns [`AppError::BadRequest`] if the body is not a non-empty JSON
    /// object (`Not a JSON`) or a required field is absent (`Missing <field>`).
    pub async fn create(
        &self,
        schema: &EntitySchema,
        parent_id: Option<&str>,
        body: Value,
    ) -> Result<Value, AppError> {
        let parent = match parent_id {
            Some(pid) => Some((self.require_parent(schema, pid).await?, pid)),
            None => None,
        };

        let mut record = require_object(body)?;
        for field in schema.required_fields {
            if !record.contains_key(*field) {
                return Err(AppError::bad_request(format!("Missing {field}")));
            }
        }

        let id = Uuid::new_v4().to_string();
        let now = timestamp();
        record.insert("id".to_string(), json!(id));
        record.insert("created_at".to_string(), json!(now));
        record.insert("updated_at".to_string(), json!(now));
        if let Some((relation, pid)) = parent {
            record.insert(relation.foreign_key.to_string(), json!(pid));
        }

        let record = Value::Object(record);
        self.store.put(schema.kind, &id, record.clone()).await?;
        self.store.flush().await?;
        Ok(record)
    }

    /// Applies a partial update to an existing record.
    ///
    /// `id`, `created_at`, `updated_at`, and the schema's immutable fields
    /// are stripped from the patch before merging; `updated_at` is then
    /// bumped to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the body is not a non-empty JSON object.
    /// Returns [`AppError::NotFound`] if no record exists.
    pub async fn update(
        &self,
        schema: &EntitySchema,
        id: &str,
        body: Value,
    ) -> Result<Value, AppError> {
        let mut patch = require_object(body)?;
        for field in ["id", "created_at", "updated_at"] {
            patch.remove(field);
        }
        for field in schema.immutable_fields {
            patch.remove(*field);
        }

        let current = self
            .store
            .get(schema.kind, id)
            .await?
            .ok_or(AppError::NotFound)?;
        let Value::Object(mut record) = current else {
            return Err(AppError::internal(format!(
                "stored {} {id} is not an object",
                schema.kind
            )));
        };

        record.extend(patch);
        record.insert("updated_at".to_string(), json!(timestamp()));

        let record = Value::Object(record);
        self.store.put(schema.kind, id, record.clone()).await?;
        self.store.flush().await?;
        Ok(record)
    }

    /// Deletes a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record exists.
    pub async fn delete(&self, schema: &EntitySchema, id: &str) -> Result<(), AppError> {
        if !self.store.delete(schema.kind, id).await? {
            return Err(AppError::NotFound);
        }
        self.store.flush().await?;
        Ok(())
    }

    /// Resolves the schema's parent relation and verifies the parent exists.
    async fn require_parent(
        &self,
        schema: &EntitySchema,
        parent_id: &str,
    ) -> Result<ParentRelation, AppError> {
        let parent = schema
            .parent
            .ok_or_else(|| AppError::internal(format!("{} has no parent relation", schema.kind)))?;

        if self.store.get(parent.kind, parent_id).await?.is_none() {
            return Err(AppError::NotFound);
        }
        Ok(parent)
    }
}

/// RFC 3339 UTC timestamp with microsecond precision.
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Accepts only a non-empty JSON object as a request body.
///
/// An empty object carries no usable attributes, so it is rejected the same
/// way as a non-object body.
fn require_object(body: Value) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(map) if !map.is_empty() => Ok(map),
        _ => Err(AppError::bad_request("Not a JSON")),
    }
}
