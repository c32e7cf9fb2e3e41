//! Storage façade trait for typed object collections.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::schema::EntityKind;

/// Errors surfaced by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A persisted storage key names a kind this build does not know.
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository interface over typed object collections.
///
/// Objects are flat JSON records keyed by kind and id. The trait mirrors the
/// operations the API layer needs and nothing more: point lookup, full scan,
/// count, upsert, delete, and a global flush.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory map, no-op flush
/// - [`crate::infrastructure::persistence::JsonFileStore`] - JSON-file-backed map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Looks up a single object by kind and id.
    async fn get(&self, kind: EntityKind, id: &str) -> StoreResult<Option<Value>>;

    /// Returns every object of the given kind, ordered by id.
    async fn all(&self, kind: EntityKind) -> StoreResult<Vec<Value>>;

    /// Returns the number of objects of the given kind.
    async fn count(&self, kind: EntityKind) -> StoreResult<u64>;

    /// Inserts or replaces the object stored under `(kind, id)`.
    async fn put(&self, kind: EntityKind, id: &str, object: Value) -> StoreResult<()>;

    /// Removes the object stored under `(kind, id)`.
    ///
    /// Returns `false` if no such object existed.
    async fn delete(&self, kind: EntityKind, id: &str) -> StoreResult<bool>;

    /// Persists the full object map to the backing medium.
    ///
    /// Called after every mutation and once more on graceful shutdown.
    async fn flush(&self) -> StoreResult<()>;
}
