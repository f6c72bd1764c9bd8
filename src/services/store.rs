// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity store: holds the current state and keeps storage in sync.

use crate::models::{ActivityAction, ActivityState};
use crate::services::reducer::reduce;
use crate::services::storage::{ActivityStorage, StorageError};

/// Owns the current [`ActivityState`] and the storage it is mirrored to.
pub struct ActivityStore {
    state: ActivityState,
    storage: Box<dyn ActivityStorage>,
}

impl ActivityStore {
    /// Build the initial state from whatever the storage holds.
    pub fn open(storage: Box<dyn ActivityStorage>) -> Self {
        let state = ActivityState::with_activities(storage.load());
        tracing::info!(count = state.activities.len(), "Activity store opened");
        Self { state, storage }
    }

    /// Current state.
    pub fn state(&self) -> &ActivityState {
        &self.state
    }

    /// Apply an action and write the activity list back if it changed.
    ///
    /// The new state is kept even when the write fails; the error is
    /// returned so the caller can report it.
    pub fn dispatch(&mut self, action: ActivityAction) -> Result<&ActivityState, StorageError> {
        let kind = action.kind();
        let next = reduce(&self.state, action);
        let changed = next.activities != self.state.activities;
        self.state = next;

        tracing::debug!(
            action = kind,
            count = self.state.activities.len(),
            active_id = %self.state.active_id,
            "Action applied"
        );

        if changed {
            if let Err(e) = self.storage.save(&self.state.activities) {
                tracing::error!(action = kind, error = %e, "Failed to persist activities");
                return Err(e);
            }
        }

        Ok(&self.state)
    }
}
