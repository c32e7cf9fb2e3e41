//! Core domain layer: entity schemas and storage abstractions.
//!
//! Contains no HTTP or persistence details — only the schema table driving
//! the generic CRUD behavior and the [`repositories::ObjectStore`] trait that
//! storage backends implement.

pub mod repositories;
pub mod schema;
