// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Calorie Tracker: log food and exercise, track net calories
//!
//! This crate provides the activity store (a pure reducer over an activity
//! list plus an edit selection), the entry form that feeds it, local JSON
//! storage, and a small HTTP API that hosts all three.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use error::Result;
use models::{ActivityAction, ActivityState};
use services::{ActivityStore, EntryForm};
use tokio::sync::Mutex;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// Serializes every action; only one transition runs at a time.
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(config: Config, store: ActivityStore, form: EntryForm) -> Self {
        Self {
            config,
            session: Mutex::new(Session::new(store, form)),
        }
    }
}

/// The store together with the form observing it.
pub struct Session {
    pub store: ActivityStore,
    pub form: EntryForm,
}

impl Session {
    pub fn new(store: ActivityStore, mut form: EntryForm) -> Self {
        form.observe(store.state());
        Self { store, form }
    }

    /// Dispatch an action and let the form see the resulting state.
    ///
    /// The form observes the new state even when persisting it failed.
    pub fn dispatch(&mut self, action: ActivityAction) -> Result<ActivityState> {
        let persisted = self.store.dispatch(action).map(|_| ());
        self.form.observe(self.store.state());
        persisted?;
        Ok(self.store.state().clone())
    }
}
