//! Table-driven route construction.
//!
//! Every resource shares the same handler set; which schema a handler sees is
//! decided here by attaching the schema as a request extension on each
//! sub-router. Adding a resource means adding a schema and two lines below.
//!
//! Path parameters are named per resource (`{state_id}`, `{city_id}`, …)
//! because the router requires one name per position across overlapping
//! routes; the generic handlers extract them as plain `Path<String>`.

use axum::{Extension, Router, routing::get};

use crate::api::handlers::{
    create_child_handler, create_handler, delete_handler, get_handler, list_children_handler,
    list_handler, stats_handler, status_handler, update_handler,
};
use crate::domain::schema::{self, EntitySchema};
use crate::state::AppState;

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /status`                        - Liveness check
/// - `GET    /stats`                         - Object counts per kind
/// - `GET    /states`, `POST /states`          - List / create states
/// - `GET|PUT|DELETE /states/{state_id}`       - Single state
/// - `GET|POST /states/{state_id}/cities`      - Cities of a state
/// - `GET|PUT|DELETE /cities/{city_id}`        - Single city
/// - `GET|POST /cities/{city_id}/places`       - Places of a city
/// - `GET|PUT|DELETE /places/{place_id}`       - Single place
/// - `GET|POST /places/{place_id}/reviews`     - Reviews of a place
/// - `GET|PUT|DELETE /reviews/{review_id}`     - Single review
/// - `GET    /amenities`, `POST /amenities`    - List / create amenities
/// - `GET|PUT|DELETE /amenities/{amenity_id}`  - Single amenity
/// - `GET    /users`, `POST /users`            - List / create users
/// - `GET|PUT|DELETE /users/{user_id}`         - Single user
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(status_handler))
        .route("/stats", get(stats_handler))
        .merge(collection("/states", &schema::STATE))
        .merge(item("/states/{state_id}", &schema::STATE))
        .merge(nested("/states/{state_id}/cities", &schema::CITY))
        .merge(item("/cities/{city_id}", &schema::CITY))
        .merge(nested("/cities/{city_id}/places", &schema::PLACE))
        .merge(item("/places/{place_id}", &schema::PLACE))
        .merge(nested("/places/{place_id}/reviews", &schema::REVIEW))
        .merge(item("/reviews/{review_id}", &schema::REVIEW))
        .merge(collection("/amenities", &schema::AMENITY))
        .merge(item("/amenities/{amenity_id}", &schema::AMENITY))
        .merge(collection("/users", &schema::USER))
        .merge(item("/users/{user_id}", &schema::USER))
}

/// `GET` (list) and `POST` (create) for a flat resource collection.
fn collection(path: &str, schema: &'static EntitySchema) -> Router<AppState> {
    Router::new()
        .route(path, get(list_handler).post(create_handler))
        .layer(Extension(schema))
}

/// `GET` (filtered list) and `POST` (create with injected parent id) for a
/// nested resource collection.
fn nested(path: &str, schema: &'static EntitySchema) -> Router<AppState> {
    Router::new()
        .route(path, get(list_children_handler).post(create_child_handler))
        .layer(Extension(schema))
}

/// `GET`, `PUT`, and `DELETE` for a single record.
fn item(path: &str, schema: &'static EntitySchema) -> Router<AppState> {
    Router::new()
        .route(
            path,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .layer(Extension(schema))
}
