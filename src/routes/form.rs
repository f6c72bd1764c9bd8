// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Entry form routes.

use crate::error::{ApiJson, Result};
use crate::models::{Activity, ActivityState};
use crate::services::FormUpdate;
use crate::{AppState, Session};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/form", get(get_form).patch(update_form))
        .route("/api/form/submit", post(submit_form))
}

/// Form contents as shown to the user.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FormResponse {
    pub draft: Activity,
    /// Whether submission is enabled
    pub is_valid: bool,
    pub submit_label: String,
    /// Whether an existing activity is selected for editing
    pub editing: bool,
}

impl FormResponse {
    fn from_session(session: &Session) -> Self {
        Self {
            draft: session.form.draft().clone(),
            is_valid: session.form.is_valid(),
            submit_label: session.form.submit_label().to_string(),
            editing: session.store.state().is_editing(),
        }
    }
}

async fn get_form(State(state): State<Arc<AppState>>) -> Json<FormResponse> {
    let session = state.session.lock().await;
    Json(FormResponse::from_session(&session))
}

/// Apply field edits to the draft.
async fn update_form(
    State(state): State<Arc<AppState>>,
    ApiJson(update): ApiJson<FormUpdate>,
) -> Result<Json<FormResponse>> {
    let mut session = state.session.lock().await;
    session.form.update(update);
    Ok(Json(FormResponse::from_session(&session)))
}

/// Submit the draft. Invalid drafts are rejected and nothing is dispatched.
async fn submit_form(State(state): State<Arc<AppState>>) -> Result<Json<ActivityState>> {
    let mut session = state.session.lock().await;

    let action = session.form.submit().inspect_err(|e| {
        tracing::info!(error = %e, "Rejected form submission");
    })?;

    let next = session.dispatch(action)?;
    Ok(Json(next))
}
