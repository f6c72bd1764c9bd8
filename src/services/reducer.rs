// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure state transitions for the activity store.
//!
//! `reduce` never fails and never touches storage: it builds a new
//! [`ActivityState`] from the previous one and an action. Persisting the
//! result is the job of [`crate::services::ActivityStore`].

use crate::models::{ActivityAction, ActivityState};

/// Compute the next state.
///
/// - `SaveActivity` replaces the entry matching `active_id` in place when an
///   edit is in progress, otherwise appends. Either way the selection is cleared.
/// - `SetActiveId` only changes the selection; the ID need not exist.
/// - `DeleteActivity` leaves `active_id` alone, even if it now dangles.
/// - `RestartApp` discards everything.
/// - `Unknown` is the identity.
///
/// The candidate in `SaveActivity` is not validated here.
pub fn reduce(state: &ActivityState, action: ActivityAction) -> ActivityState {
    match action {
        ActivityAction::SaveActivity { new_activity } => {
            let activities = if state.is_editing() {
                state
                    .activities
                    .iter()
                    .map(|activity| {
                        if activity.id == state.active_id {
                            new_activity.clone()
                        } else {
                            activity.clone()
                        }
                    })
                    .collect()
            } else {
                let mut activities = Vec::with_capacity(state.activities.len() + 1);
                activities.extend_from_slice(&state.activities);
                activities.push(new_activity);
                activities
            };

            ActivityState {
                activities,
                active_id: String::new(),
            }
        }
        ActivityAction::SetActiveId { id } => ActivityState {
            activities: state.activities.clone(),
            active_id: id,
        },
        ActivityAction::DeleteActivity { id } => ActivityState {
            activities: state
                .activities
                .iter()
                .filter(|activity| activity.id != id)
                .cloned()
                .collect(),
            active_id: state.active_id.clone(),
        },
        ActivityAction::RestartApp => ActivityState::default(),
        ActivityAction::Unknown => state.clone(),
    }
}
