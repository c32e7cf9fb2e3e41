//! HTTP request handlers for API endpoints.
//!
//! The [`crud`] module holds the seven generic handlers behind every
//! resource route; [`index`] holds the status and stats endpoints.

pub mod crud;
pub mod index;

pub use crud::{
    create_child_handler, create_handler, delete_handler, get_handler, list_children_handler,
    list_handler, update_handler,
};
pub use index::{stats_handler, status_handler};
