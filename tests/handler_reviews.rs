mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

async fn setup(server: &TestServer) -> (String, String) {
    let state_id = common::create_state(server, "Nevada").await;
    let city_id = common::create_city(server, &state_id, "Reno").await;
    let host_id = common::create_user(server, "host@example.com").await;
    let place_id = common::create_place(server, &city_id, &host_id, "Desert Cabin").await;
    let guest_id = common::create_user(server, "guest@example.com").await;
    (place_id, guest_id)
}

#[tokio::test]
async fn test_create_review_success() {
    let server = common::make_server();
    let (place_id, guest_id) = setup(&server).await;

    let response = server
        .post(&format!("/places/{place_id}/reviews"))
        .json(&json!({ "user_id": guest_id, "text": "Great stay!" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["text"], "Great stay!");
    assert_eq!(body["place_id"], place_id.as_str());
    assert_eq!(body["user_id"], guest_id.as_str());
}

#[tokio::test]
async fn test_create_review_missing_text() {
    let server = common::make_server();
    let (place_id, guest_id) = setup(&server).await;

    let response = server
        .post(&format!("/places/{place_id}/reviews"))
        .json(&json!({ "user_id": guest_id }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({"error": "Missing text"})
    );
}

#[tokio::test]
async fn test_create_review_unknown_place() {
    let server = common::make_server();

    let response = server
        .post("/places/no-such-place/reviews")
        .json(&json!({ "user_id": "u1", "text": "?" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_reviews_list_unknown_place() {
    let server = common::make_server();

    server
        .get("/places/no-such-place/reviews")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_reviews_list_filters_by_place() {
    let server = common::make_server();
    let (place_id, guest_id) = setup(&server).await;

    // Second place under a fresh city, with its own review.
    let state_id = common::create_state(&server, "Oregon").await;
    let city_id = common::create_city(&server, &state_id, "Bend").await;
    let other_place = common::create_place(&server, &city_id, &guest_id, "River Hut").await;
    common::create_review(&server, &other_place, &guest_id, "Fine").await;

    common::create_review(&server, &place_id, &guest_id, "Great stay!").await;
    common::create_review(&server, &place_id, &guest_id, "Would return").await;

    let response = server.get(&format!("/places/{place_id}/reviews")).await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r["place_id"] == place_id.as_str()));
}

#[tokio::test]
async fn test_update_review_text_only() {
    let server = common::make_server();
    let (place_id, guest_id) = setup(&server).await;
    let review_id = common::create_review(&server, &place_id, &guest_id, "Great stay!").await;

    let response = server
        .put(&format!("/reviews/{review_id}"))
        .json(&json!({
            "text": "Even better the second time",
            "place_id": "elsewhere",
            "user_id": "someone-else"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["text"], "Even better the second time");
    assert_eq!(body["place_id"], place_id.as_str());
    assert_eq!(body["user_id"], guest_id.as_str());
}

#[tokio::test]
async fn test_delete_review() {
    let server = common::make_server();
    let (place_id, guest_id) = setup(&server).await;
    let review_id = common::create_review(&server, &place_id, &guest_id, "Great stay!").await;

    server
        .delete(&format!("/reviews/{review_id}"))
        .await
        .assert_status_ok();
    server
        .get(&format!("/reviews/{review_id}"))
        .await
        .assert_status_not_found();
}
