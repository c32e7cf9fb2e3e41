//! Handlers for the status and stats endpoints.

use axum::{Json, extract::State};

use crate::api::dto::index::{StatsResponse, StatusResponse};
use crate::domain::schema::EntityKind;
use crate::error::AppError;
use crate::state::AppState;

/// Liveness check.
///
/// # Endpoint
///
/// `GET /status` → `{"status":"OK"}`
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse { status: "OK" })
}

/// Object counts per entity kind.
///
/// # Endpoint
///
/// `GET /stats`
///
/// # Response
///
/// ```json
/// {
///   "amenities": 2,
///   "cities": 10,
///   "places": 5,
///   "reviews": 8,
///   "states": 3,
///   "users": 4
/// }
/// ```
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    Ok(Json(StatsResponse {
        amenities: state.store.count(EntityKind::Amenity).await?,
        cities: state.store.count(EntityKind::City).await?,
        places: state.store.count(EntityKind::Place).await?,
        reviews: state.store.count(EntityKind::Review).await?,
        states: state.store.count(EntityKind::State).await?,
        users: state.store.count(EntityKind::User).await?,
    }))
}
