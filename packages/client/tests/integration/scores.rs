//! Judging and score reads: `/judge-code`, `/get-submitted-students`,
//! `/all-student-scores`.

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use client::masked;

use crate::common::{MockBackend, unreachable_client};

#[tokio::test]
async fn judge_code_sends_the_student_id_and_unwraps_data() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let sink = seen.clone();
    let routes = Router::new().route(
        "/judge-code",
        post(move |Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                *sink.lock().unwrap() = Some(body);
                Json(json!({ "data": { "verdict": "AC", "score": 100 } }))
            }
        }),
    );
    let backend = MockBackend::spawn(routes).await;

    let outcome = backend.client().judge_code("S1").await.unwrap();
    assert_eq!(outcome, json!({ "verdict": "AC", "score": 100 }));
    assert_eq!(
        seen.lock().unwrap().take().unwrap(),
        json!({ "studentID": "S1" })
    );
}

#[tokio::test]
async fn judge_code_masks_a_500_to_none() {
    let routes = Router::new().route(
        "/judge-code",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let backend = MockBackend::spawn(routes).await;

    assert_eq!(masked::execute_code(&backend.client(), "S1").await, None);
}

#[tokio::test]
async fn submitted_students_unwraps_the_result_list() {
    let routes = Router::new().route(
        "/get-submitted-students",
        get(|| async { Json(json!({ "data": { "result": ["S1", "S2"] } })) }),
    );
    let backend = MockBackend::spawn(routes).await;

    assert_eq!(
        backend.client().submitted_students().await.unwrap(),
        vec!["S1".to_string(), "S2".to_string()]
    );
}

#[tokio::test]
async fn submitted_students_masks_errors_to_an_empty_list() {
    let client = unreachable_client().await;
    assert!(masked::get_submitted_students(&client).await.is_empty());

    let routes = Router::new().route(
        "/get-submitted-students",
        get(|| async { StatusCode::BAD_GATEWAY }),
    );
    let backend = MockBackend::spawn(routes).await;
    assert!(
        masked::get_submitted_students(&backend.client())
            .await
            .is_empty()
    );
}

#[tokio::test]
async fn all_student_scores_is_a_post_and_unwraps_data() {
    let routes = Router::new().route(
        "/all-student-scores",
        post(|| async {
            Json(json!({ "data": [
                { "student": "S1", "score": 95 },
                { "student": "S2", "score": 7 },
            ] }))
        }),
    );
    let backend = MockBackend::spawn(routes).await;

    let scores = backend.client().all_student_scores().await.unwrap();
    assert_eq!(scores.as_array().unwrap().len(), 2);
    assert_eq!(scores[0]["student"], "S1");
}

#[tokio::test]
async fn all_student_scores_masks_errors_to_none() {
    let client = unreachable_client().await;
    assert_eq!(masked::get_all_students_scores(&client).await, None);
}

#[tokio::test]
async fn an_empty_submission_list_is_distinguishable_from_a_failure() {
    let routes = Router::new().route(
        "/get-submitted-students",
        get(|| async { Json(json!({ "data": { "result": [] } })) }),
    );
    let backend = MockBackend::spawn(routes).await;

    // Typed layer: Ok(empty) versus Err.
    let students = backend.client().submitted_students().await.unwrap();
    assert!(students.is_empty());
    assert!(unreachable_client().await.submitted_students().await.is_err());
}
