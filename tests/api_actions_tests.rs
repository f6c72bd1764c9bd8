// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Action dispatch over HTTP.
//!
//! These tests drive the store through `/api/actions` using the same JSON
//! action protocol the frontend sends, and check what ends up in storage.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use calorie_tracker::routes::create_router;
use serde_json::json;
use tower::ServiceExt;

mod common;

use common::{activity, create_test_state, send};

#[tokio::test]
async fn test_health() {
    let (state, _) = create_test_state(vec![]);
    let (status, body) = send(&state, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_initial_state_comes_from_storage() {
    let (state, _) = create_test_state(vec![activity("a", 1, "Salad", 300)]);

    let (status, body) = send(&state, Method::GET, "/api/state", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "activities": [{"id": "a", "category": 1, "name": "Salad", "calories": 300}],
            "activeId": ""
        })
    );
}

#[tokio::test]
async fn test_edit_workflow_over_http() {
    let (state, storage) = create_test_state(vec![]);

    let (status, body) = send(
        &state,
        Method::POST,
        "/api/actions",
        Some(json!({
            "type": "save-activity",
            "payload": {"newActivity": {"id": "a", "category": 1, "name": "Salad", "calories": 300}}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["activities"].as_array().unwrap().len(), 1);
    assert_eq!(body["activeId"], "");

    let (_, body) = send(
        &state,
        Method::POST,
        "/api/actions",
        Some(json!({"type": "set-activeId", "payload": {"id": "a"}})),
    )
    .await;
    assert_eq!(body["activeId"], "a");
    assert_eq!(body["activities"][0]["calories"], 300);

    let (_, body) = send(
        &state,
        Method::POST,
        "/api/actions",
        Some(json!({
            "type": "save-activity",
            "payload": {"newActivity": {"id": "a", "category": 1, "name": "Salad", "calories": 350}}
        })),
    )
    .await;
    assert_eq!(body["activities"].as_array().unwrap().len(), 1);
    assert_eq!(body["activities"][0]["calories"], 350);
    assert_eq!(body["activeId"], "");
    assert_eq!(storage.snapshot(), vec![activity("a", 1, "Salad", 350)]);

    let (_, body) = send(
        &state,
        Method::POST,
        "/api/actions",
        Some(json!({"type": "delete-activity", "payload": {"id": "a"}})),
    )
    .await;
    assert_eq!(body, json!({"activities": [], "activeId": ""}));
    assert!(storage.snapshot().is_empty());
}

#[tokio::test]
async fn test_delete_selected_leaves_dangling_active_id() {
    let (state, _) = create_test_state(vec![
        activity("a", 1, "Salad", 300),
        activity("b", 2, "Bike", 450),
    ]);

    send(
        &state,
        Method::POST,
        "/api/actions",
        Some(json!({"type": "set-activeId", "payload": {"id": "b"}})),
    )
    .await;
    let (status, body) = send(
        &state,
        Method::POST,
        "/api/actions",
        Some(json!({"type": "delete-activity", "payload": {"id": "b"}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["activeId"], "b");
    assert_eq!(body["activities"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_restart_clears_state_and_storage() {
    let (state, storage) = create_test_state(vec![
        activity("a", 1, "Salad", 300),
        activity("b", 2, "Bike", 450),
    ]);

    let (status, body) = send(
        &state,
        Method::POST,
        "/api/actions",
        Some(json!({"type": "restart-app"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"activities": [], "activeId": ""}));
    assert!(storage.snapshot().is_empty());
}

#[tokio::test]
async fn test_unrecognized_action_is_ignored() {
    let (state, storage) = create_test_state(vec![activity("a", 1, "Salad", 300)]);

    let (status, body) = send(
        &state,
        Method::POST,
        "/api/actions",
        Some(json!({"type": "toggle-theme"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["activities"].as_array().unwrap().len(), 1);
    assert_eq!(storage.save_count(), 0);
}

#[tokio::test]
async fn test_unrecognized_action_with_payload_is_ignored() {
    let (state, storage) = create_test_state(vec![activity("a", 1, "Salad", 300)]);

    let (status, body) = send(
        &state,
        Method::POST,
        "/api/actions",
        Some(json!({"type": "toggle-theme", "payload": {"dark": true}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["activities"].as_array().unwrap().len(), 1);
    assert_eq!(storage.save_count(), 0);
}

#[tokio::test]
async fn test_restart_with_empty_payload() {
    let (state, storage) = create_test_state(vec![activity("a", 1, "Salad", 300)]);

    let (status, body) = send(
        &state,
        Method::POST,
        "/api/actions",
        Some(json!({"type": "restart-app", "payload": {}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"activities": [], "activeId": ""}));
    assert!(storage.snapshot().is_empty());
}

#[tokio::test]
async fn test_malformed_action_rejected() {
    let (state, storage) = create_test_state(vec![]);

    let (status, body) = send(
        &state,
        Method::POST,
        "/api/actions",
        Some(json!({"type": "delete-activity", "payload": {"wrong": 1}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert!(body["details"].is_string());
    assert_eq!(storage.save_count(), 0);
}

#[tokio::test]
async fn test_non_json_action_rejected() {
    let (state, _) = create_test_state(vec![]);

    let response = create_router(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/actions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "bad_request");
}

#[tokio::test]
async fn test_summary_and_categories() {
    let (state, _) = create_test_state(vec![
        activity("a", 1, "Salad", 300),
        activity("b", 2, "Bike", 450),
        activity("c", 1, "Juice", 120),
    ]);

    let (status, body) = send(&state, Method::GET, "/api/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"consumed": 420, "burned": 450, "net": -30, "can_restart": true})
    );

    let (_, body) = send(&state, Method::GET, "/api/categories", None).await;
    assert_eq!(
        body,
        json!([{"id": 1, "name": "Food"}, {"id": 2, "name": "Exercise"}])
    );
}

#[tokio::test]
async fn test_summary_empty() {
    let (state, _) = create_test_state(vec![]);
    let (_, body) = send(&state, Method::GET, "/api/summary", None).await;
    assert_eq!(
        body,
        json!({"consumed": 0, "burned": 0, "net": 0, "can_restart": false})
    );
}
