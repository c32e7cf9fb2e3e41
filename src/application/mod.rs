//! Application layer: business logic between the API and the storage façade.

pub mod services;
