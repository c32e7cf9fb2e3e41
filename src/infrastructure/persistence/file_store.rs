//! JSON-file-backed object store.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::domain::repositories::{ObjectStore, StoreError, StoreResult};
use crate::domain::schema::EntityKind;

/// An object store persisted to a single JSON file.
///
/// The on-disk document is one flat object keyed `"<Kind>.<id>"`, e.g.
/// `"State.0161a8cc-…"`. The whole map is loaded at startup and rewritten on
/// every `flush`, which the CRUD service calls after each mutation. Reads are
/// served from memory.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    objects: RwLock<HashMap<EntityKind, BTreeMap<String, Value>>>,
}

impl JsonFileStore {
    /// Opens the store, loading any existing objects from `path`.
    ///
    /// A missing file is treated as an empty store; a present but unreadable
    /// or malformed file is an error so corrupt data is never silently
    /// overwritten.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let objects = match tokio::fs::read(&path).await {
            Ok(bytes) => Self::parse(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            objects: RwLock::new(objects),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(bytes: &[u8]) -> StoreResult<HashMap<EntityKind, BTreeMap<String, Value>>> {
        let document: Map<String, Value> = serde_json::from_slice(bytes)?;

        let mut objects: HashMap<EntityKind, BTreeMap<String, Value>> = HashMap::new();
        for (key, object) in document {
            let (kind_name, id) = key
                .split_once('.')
                .ok_or_else(|| StoreError::UnknownKind(key.clone()))?;
            let kind = EntityKind::from_name(kind_name)
                .ok_or_else(|| StoreError::UnknownKind(kind_name.to_string()))?;
            objects.entry(kind).or_default().insert(id.to_string(), object);
        }
        Ok(objects)
    }

    async fn serialize(&self) -> StoreResult<Vec<u8>> {
        let objects = self.objects.read().await;

        let mut document = Map::new();
        for (kind, coll) in objects.iter() {
            for (id, object) in coll {
                document.insert(format!("{kind}.{id}"), object.clone());
            }
        }
        Ok(serde_json::to_vec_pretty(&Value::Object(document))?)
    }
}

#[async_trait]
impl ObjectStore for JsonFileStore {
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
        let bytes = self.serialize().await?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
