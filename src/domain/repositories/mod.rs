//! Storage abstractions consumed by the application layer.

mod object_store;

pub use object_store::{ObjectStore, StoreError, StoreResult};

#[cfg(test)]
pub use object_store::MockObjectStore;
