//! Application services.

mod crud_service;

pub use crud_service::CrudService;
