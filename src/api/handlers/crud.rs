//! Generic CRUD handlers.
//!
//! One handler per operation, shared by every resource. The
//! [`EntitySchema`] governing a request arrives as a request extension,
//! attached per resource sub-router in [`crate::api::routes`].

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

use crate::domain::schema::EntitySchema;
use crate::error::AppError;
use crate::state::AppState;

/// Unwraps the JSON body, mapping any extraction failure (missing body,
/// wrong content type, parse error) to the canonical 400 response.
fn require_json(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(value)| value)
        .map_err(|_| AppError::bad_request("Not a JSON"))
}

/// Lists all records of a flat resource.
///
/// `GET /<collection>` → 200 array
pub async fn list_handler(
    State(state): State<AppState>,
    Extension(schema): Extension<&'static EntitySchema>,
) -> Result<Json<Vec<Value>>, AppError> {
    Ok(Json(state.crud.list(schema).await?))
}

/// Lists the records of a nested resource under one parent.
///
/// `GET /<parent>/{parent_id}/<collection>` → 200 array | 404
pub async fn list_children_handler(
    State(state): State<AppState>,
    Extension(schema): Extension<&'static EntitySchema>,
    Path(parent_id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    Ok(Json(state.crud.list_children(schema, &parent_id).await?))
}

/// Fetches a single record by id.
///
/// `GET /<collection>/{id}` → 200 record | 404
pub async fn get_handler(
    State(state): State<AppState>,
    Extension(schema): Extension<&'static EntitySchema>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.crud.get(schema, &id).await?))
}

/// Creates a record of a flat resource.
///
/// `POST /<collection>` → 201 record | 400
pub async fn create_handler(
    State(state): State<AppState>,
    Extension(schema): Extension<&'static EntitySchema>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let record = state.crud.create(schema, None, require_json(body)?).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Creates a record of a nested resource, injecting the parent id.
///
/// `POST /<parent>/{parent_id}/<collection>` → 201 record | 400 | 404
pub async fn create_child_handler(
    State(state): State<AppState>,
    Extension(schema): Extension<&'static EntitySchema>,
    Path(parent_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let record = state
        .crud
        .create(schema, Some(&parent_id), require_json(body)?)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Partially updates a record. Immutable fields in the patch are ignored.
///
/// `PUT /<collection>/{id}` → 200 record | 400 | 404
pub async fn update_handler(
    State(state): State<AppState>,
    Extension(schema): Extension<&'static EntitySchema>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let record = state.crud.update(schema, &id, require_json(body)?).await?;
    Ok(Json(record))
}

/// Deletes a record.
///
/// `DELETE /<collection>/{id}` → 200 `{}` | 404
pub async fn delete_handler(
    State(state): State<AppState>,
    Extension(schema): Extension<&'static EntitySchema>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state.crud.delete(schema, &id).await?;
    Ok(Json(Value::Object(serde_json::Map::new())))
}
