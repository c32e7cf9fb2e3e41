#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

use lodging_api::api;
use lodging_api::infrastructure::persistence::MemoryStore;
use lodging_api::state::AppState;

/// Spins up a test server over an empty in-memory store.
pub fn make_server() -> TestServer {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store);
    let app = api::routes::routes().with_state(state);
    TestServer::new(app).unwrap()
}

pub async fn create_state(server: &TestServer, name: &str) -> String {
    let response = server.post("/states").json(&json!({ "name": name })).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn create_city(server: &TestServer, state_id: &str, name: &str) -> String {
    let response = server
        .post(&format!("/states/{state_id}/cities"))
        .json(&json!({ "name": name }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn create_user(server: &TestServer, email: &str) -> String {
    let response = server
        .post("/users")
        .json(&json!({ "email": email, "password": "hunter2" }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn create_place(server: &TestServer, city_id: &str, user_id: &str, name: &str) -> String {
    let response = server
        .post(&format!("/cities/{city_id}/places"))
        .json(&json!({ "user_id": user_id, "name": name }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn create_review(server: &TestServer, place_id: &str, user_id: &str, text: &str) -> String {
    let response = server
        .post(&format!("/places/{place_id}/reviews"))
        .json(&json!({ "user_id": user_id, "text": text }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string()
}
