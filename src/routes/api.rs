// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store routes: read state, dispatch actions, derived totals.

use crate::error::{ApiJson, Result};
use crate::models::category::CATEGORIES;
use crate::models::{ActivityAction, ActivityState, CalorieSummary, Category};
use crate::AppState;
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
        .route("/api/state", get(get_state))
        .route("/api/actions", post(dispatch_action))
        .route("/api/summary", get(get_summary))
        .route("/api/categories", get(get_categories))
}

/// Current store state.
async fn get_state(State(state): State<Arc<AppState>>) -> Json<ActivityState> {
    let session = state.session.lock().await;
    Json(session.store.state().clone())
}

/// Dispatch an action to the store and return the new state.
///
/// Unrecognized action types are accepted and leave the state unchanged;
/// malformed bodies are rejected with 400.
async fn dispatch_action(
    State(state): State<Arc<AppState>>,
    ApiJson(action): ApiJson<ActivityAction>,
) -> Result<Json<ActivityState>> {
    tracing::info!(action = action.kind(), "Dispatching action");

    let mut session = state.session.lock().await;
    let next = session.dispatch(action)?;
    Ok(Json(next))
}

// ─── Summary ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub totals: CalorieSummary,
    /// Restarting only makes sense once something has been logged
    pub can_restart: bool,
}

async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    let session = state.session.lock().await;
    let activities = &session.store.state().activities;

    Json(SummaryResponse {
        totals: CalorieSummary::from_activities(activities),
        can_restart: !activities.is_empty(),
    })
}

async fn get_categories() -> Json<&'static [Category]> {
    Json(CATEGORIES)
}
