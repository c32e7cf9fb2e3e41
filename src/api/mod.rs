//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into CRUD service calls and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Table-driven route construction

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
