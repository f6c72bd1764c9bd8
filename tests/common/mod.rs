// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use calorie_tracker::config::Config;
use calorie_tracker::models::Activity;
use calorie_tracker::routes::create_router;
use calorie_tracker::services::{ActivityStore, EntryForm, MemoryStorage, SequentialIds};
use calorie_tracker::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Build an activity fixture.
#[allow(dead_code)]
pub fn activity(id: &str, category: u32, name: &str, calories: i64) -> Activity {
    Activity {
        id: id.to_string(),
        category,
        name: name.to_string(),
        calories,
    }
}

/// Create test state backed by in-memory storage.
/// Returns the state and a handle on the storage for assertions.
#[allow(dead_code)]
pub fn create_test_state(initial: Vec<Activity>) -> (Arc<AppState>, MemoryStorage) {
    let storage = MemoryStorage::new(initial);
    let store = ActivityStore::open(Box::new(storage.clone()));
    let form = EntryForm::new(Box::new(SequentialIds::new("test")));
    let state = Arc::new(AppState::new(Config::default(), store, form));
    (state, storage)
}

/// Send one request through a fresh router over the shared state.
#[allow(dead_code)]
pub async fn send(
    state: &Arc<AppState>,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = create_router(state.clone())
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}
