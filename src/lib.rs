//! # Lodging API
//!
//! A REST API exposing CRUD operations over lodging listing entities
//! (states, cities, amenities, places, reviews, users), built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entity schemas and the object-store trait
//! - **Application Layer** ([`application`]) - Generic CRUD service and validation
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory and file-backed stores
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Design
//!
//! Every resource follows the same five-operation contract (list, get, create,
//! update, delete), so there is exactly one CRUD implementation, parameterized
//! by an [`domain::schema::EntitySchema`] descriptor: required fields,
//! immutable fields, and an optional parent relation. Routes are built from
//! the same schema table.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: persist objects to a JSON file instead of memory
//! export DATA_FILE="objects.json"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CrudService;
    pub use crate::domain::repositories::ObjectStore;
    pub use crate::domain::schema::{EntityKind, EntitySchema};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{JsonFileStore, MemoryStore};
    pub use crate::state::AppState;
}
