//! Anti-cheat and log operations: `/update-alert-list`, `/get-alert-logs`,
//! `/set-alert-ok-status`, `/get-all-logs`.

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use client::masked;

use crate::common::{MockBackend, unreachable_client};

#[tokio::test]
async fn refresh_alerts_unwraps_data_directly() {
    let routes = Router::new().route(
        "/update-alert-list",
        get(|| async {
            Json(json!({ "data": [
                { "id": "A1", "isOk": false, "student": "S1", "reason": "tab switch" },
                { "id": "A2", "isOk": true },
            ] }))
        }),
    );
    let backend = MockBackend::spawn(routes).await;

    let alerts = backend.client().refresh_alerts().await.unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].id, "A1");
    assert!(!alerts[0].is_ok);
    // Fields beyond id/isOk survive untouched.
    assert_eq!(alerts[0].extra["reason"], "tab switch");
    assert!(alerts[1].is_ok);
    assert!(alerts[1].extra.is_empty());
}

#[tokio::test]
async fn alert_list_unwraps_the_result_list() {
    let routes = Router::new().route(
        "/get-alert-logs",
        get(|| async {
            Json(json!({ "data": { "result": [
                { "id": "A1", "isOk": false },
            ] } }))
        }),
    );
    let backend = MockBackend::spawn(routes).await;

    let alerts = backend.client().alert_list().await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].id, "A1");
}

#[tokio::test]
async fn alert_reads_mask_errors_to_empty_lists() {
    let client = unreachable_client().await;
    assert!(masked::update_logs(&client).await.is_empty());
    assert!(masked::get_alert_list(&client).await.is_empty());
    assert!(masked::get_all_logs(&client).await.is_empty());
}

#[tokio::test]
async fn set_alert_status_reads_the_top_level_success_flag() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let sink = seen.clone();
    let routes = Router::new().route(
        "/set-alert-ok-status",
        post(move |Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                *sink.lock().unwrap() = Some(body);
                // This endpoint alone answers without the `data` envelope.
                Json(json!({ "success": true }))
            }
        }),
    );
    let backend = MockBackend::spawn(routes).await;

    assert!(backend.client().set_alert_status("A1", true).await.unwrap());
    assert_eq!(
        seen.lock().unwrap().take().unwrap(),
        json!({ "id": "A1", "isOk": true })
    );
}

#[tokio::test]
async fn set_alert_status_masks_a_malformed_response_to_false() {
    let routes = Router::new().route(
        "/set-alert-ok-status",
        post(|| async { Json(json!({ "data": {} })) }),
    );
    let backend = MockBackend::spawn(routes).await;

    assert!(!masked::modify_alert_status(&backend.client(), "A1", true).await);
}

#[tokio::test]
async fn set_alert_status_forwards_a_negative_acknowledgement() {
    let routes = Router::new().route(
        "/set-alert-ok-status",
        post(|| async { Json(json!({ "success": false })) }),
    );
    let backend = MockBackend::spawn(routes).await;

    // Ok(false) from the typed layer, false from the masked one; only the
    // typed layer can tell this apart from a failed call.
    assert!(!backend.client().set_alert_status("A1", false).await.unwrap());
    assert!(!masked::modify_alert_status(&backend.client(), "A1", false).await);
}

#[tokio::test]
async fn all_logs_unwraps_the_result_list() {
    let routes = Router::new().route(
        "/get-all-logs",
        get(|| async {
            Json(json!({ "data": { "result": [
                { "id": "L1", "event": "login" },
                { "id": "L2", "event": "submit" },
            ] } }))
        }),
    );
    let backend = MockBackend::spawn(routes).await;

    let logs = backend.client().all_logs().await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1]["event"], "submit");
}

#[tokio::test]
async fn all_logs_surfaces_a_500() {
    let routes = Router::new().route(
        "/get-all-logs",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let backend = MockBackend::spawn(routes).await;

    assert!(backend.client().all_logs().await.is_err());
    assert!(masked::get_all_logs(&backend.client()).await.is_empty());
}
