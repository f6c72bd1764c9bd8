// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calorie Tracker API Server
//!
//! Hosts the activity store, the entry form and local JSON storage behind
//! a small HTTP API for a single local user.

use calorie_tracker::{
    config::Config,
    services::{ActivityStore, EntryForm, JsonFileStorage, UuidGenerator},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Calorie Tracker API");

    // Load stored activities (missing or corrupt data starts empty)
    tracing::info!(path = %config.storage_path.display(), "Opening activity storage");
    let storage = JsonFileStorage::new(&config.storage_path);
    let store = ActivityStore::open(Box::new(storage));
    let form = EntryForm::new(Box::new(UuidGenerator));

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), store, form));

    // Build router
    let app = calorie_tracker::routes::create_router(state);

    // Start server
    let addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("calorie_tracker=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
