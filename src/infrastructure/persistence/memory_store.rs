//! In-memory object store.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::repositories::{ObjectStore, StoreResult};
use crate::domain::schema::EntityKind;

/// An object store that keeps everything in process memory.
///
/// Used when no `DATA_FILE` is configured and by the test suites. Objects are
/// kept per kind in id-ordered maps so listing order is deterministic.
/// `flush` is a no-op.
pub struct MemoryStore {
    objects: RwLock<HashMap<EntityKind, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, kind: EntityKind, id: &str) -> StoreResult<Option<Value>> {
        let objects = self.objects.read().await;
        Ok(objects.get(&kind).and_then(|coll| coll.get(id)).cloned())
    }

    async fn all(&self, kind: EntityKind) -> StoreResult<Vec<Value>> {
        let objects = self.objects.read().await;
        Ok(objects
            .get(&kind)
            .map(|coll| coll.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn count(&self, kind: EntityKind) -> StoreResult<u64> {
        let objects = self.objects.read().await;
        Ok(objects.get(&kind).map(|coll| coll.len() as u64).unwrap_or(0))
    }

    async fn put(&self, kind: EntityKind, id: &str, object: Value) -> StoreResult<()> {
        let mut objects = self.objects.write().await;
        objects
            .entry(kind)
            .or_default()
            .insert(id.to_string(), object);
        Ok(())
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> StoreResult<bool> {
        let mut objects = self.objects.write().await;
        Ok(objects
            .get_mut(&kind)
            .is_some_and(|coll| coll.remove(id).is_some()))
    }

    async fn flush(&self) -> StoreResult<()> {
        Ok(())
    }
}
