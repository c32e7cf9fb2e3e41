use std::sync::Arc;

use crate::application::services::CrudService;
use crate::domain::repositories::ObjectStore;

/// Shared application state injected into all handlers.
///
/// The store appears twice on purpose: handlers go through the CRUD service,
/// while the stats endpoint and the shutdown flush talk to the store
/// directly.
#[derive(Clone)]
pub struct AppState {
    pub crud: Arc<CrudService>,
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Wires up application state around a storage backend.
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            crud: Arc::new(CrudService::new(store.clone())),
            store,
        }
    }
}
