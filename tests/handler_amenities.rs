mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_amenity_crud_cycle() {
    let server = common::make_server();

    let response = server
        .post("/amenities")
        .json(&json!({ "name": "Wifi" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let id = response.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get("/amenities").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>().as_array().unwrap().len(), 1);

    let response = server
        .put(&format!("/amenities/{id}"))
        .json(&json!({ "name": "Fast Wifi" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["name"], "Fast Wifi");

    let response = server.delete(&format!("/amenities/{id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({}));

    server
        .get(&format!("/amenities/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_create_amenity_missing_name() {
    let server = common::make_server();

    let response = server.post("/amenities").json(&json!({ "free": true })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({"error": "Missing name"})
    );
}

#[tokio::test]
async fn test_get_amenity_not_found() {
    let server = common::make_server();

    let response = server.get("/amenities/no-such-id").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({"error": "Not found"})
    );
}
