//! End-to-end persistence: mutations made through the API survive a restart
//! of a file-backed store.

mod common;

use axum_test::TestServer;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lodging_api::api;
use lodging_api::domain::schema::EntityKind;
use lodging_api::infrastructure::persistence::JsonFileStore;
use lodging_api::prelude::ObjectStore;
use lodging_api::state::AppState;

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lodging-api-it-{}-{}.json", name, uuid::Uuid::new_v4()))
}

async fn make_file_server(path: &Path) -> TestServer {
    let store = Arc::new(JsonFileStore::open(path).await.unwrap());
    let state = AppState::new(store);
    let app = api::routes::routes().with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_created_records_survive_restart() {
    let path = scratch_file("create");

    let state_id = {
        let server = make_file_server(&path).await;
        common::create_state(&server, "Nevada").await
    };

    let reopened = JsonFileStore::open(&path).await.unwrap();
    let record = reopened
        .get(EntityKind::State, &state_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record["name"], "Nevada");

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_deletes_survive_restart() {
    let path = scratch_file("delete");

    {
        let server = make_file_server(&path).await;
        let state_id = common::create_state(&server, "Nevada").await;
        common::create_state(&server, "Oregon").await;
        server
            .delete(&format!("/states/{state_id}"))
            .await
            .assert_status_ok();
    }

    let server = make_file_server(&path).await;
    let response = server.get("/states").await;
    let body = response.json::<serde_json::Value>();
    let states = body.as_array().unwrap();
    assert_eq!(states.len(), 1);
    assert_eq!(states[0]["name"], "Oregon");

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_rejected_requests_leave_file_untouched() {
    let path = scratch_file("no-side-effect");

    {
        let server = make_file_server(&path).await;
        server.post("/states").json(&json!({ "oops": 1 })).await;
    }

    // Nothing valid was ever written, so the file was never flushed.
    assert!(tokio::fs::metadata(&path).await.is_err());
}
