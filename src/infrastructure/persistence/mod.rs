//! Object-store implementations.
//!
//! Provides two [`crate::domain::repositories::ObjectStore`] backends:
//! - [`MemoryStore`] - purely in-memory, used by default and in tests
//! - [`JsonFileStore`] - persists the object map to a single JSON file

mod file_store;
mod memory_store;

pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;
