//! Data Transfer Objects for API responses.
//!
//! Entity records are schemaless JSON objects and pass through as
//! `serde_json::Value`; only the index endpoints have typed response shapes.

pub mod index;
