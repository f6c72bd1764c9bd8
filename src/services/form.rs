// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Entry form: builds candidate activities and turns them into actions.
//!
//! The form owns a draft [`Activity`]. It is the only place activities are
//! validated; the store trusts whatever the form submits.

use crate::models::{category, Activity, ActivityAction, ActivityState};
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use validator::Validate;

/// Source of fresh activity identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Predictable identifiers (`{prefix}-1`, `{prefix}-2`, ...) for tests.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

/// Field edits applied to the draft. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormUpdate {
    pub category: Option<u32>,
    pub name: Option<String>,
    pub calories: Option<i64>,
}

/// Form state for composing a new activity or editing an existing one.
pub struct EntryForm {
    draft: Activity,
    ids: Box<dyn IdGenerator>,
    /// Last `active_id` seen by [`EntryForm::observe`]
    observed_active_id: String,
}

impl EntryForm {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        let draft = blank_draft(ids.as_ref());
        Self {
            draft,
            ids,
            observed_active_id: String::new(),
        }
    }

    pub fn draft(&self) -> &Activity {
        &self.draft
    }

    pub fn update(&mut self, update: FormUpdate) {
        if let Some(category) = update.category {
            self.draft.category = category;
        }
        if let Some(name) = update.name {
            self.draft.name = name;
        }
        if let Some(calories) = update.calories {
            self.draft.calories = calories;
        }
    }

    /// Category > 0, non-blank name, calories > 0.
    pub fn is_valid(&self) -> bool {
        self.draft.validate().is_ok()
    }

    /// Label for the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.draft.category == category::FOOD {
            "Save food"
        } else {
            "Save exercise"
        }
    }

    /// Turn the draft into a `SaveActivity` action and start a fresh draft.
    ///
    /// An invalid draft is left in place and nothing is produced.
    pub fn submit(&mut self) -> Result<ActivityAction, FormError> {
        self.draft.validate()?;

        let fresh = blank_draft(self.ids.as_ref());
        let new_activity = std::mem::replace(&mut self.draft, fresh);
        tracing::debug!(id = %new_activity.id, "Form submitted");

        Ok(ActivityAction::SaveActivity { new_activity })
    }

    /// React to a new store state.
    ///
    /// When the selection changed to a non-empty ID, the selected activity is
    /// copied into the draft. A selection that no longer exists leaves the
    /// draft as it is.
    pub fn observe(&mut self, state: &ActivityState) {
        if state.active_id == self.observed_active_id {
            return;
        }
        self.observed_active_id = state.active_id.clone();

        if !state.is_editing() {
            return;
        }

        match state.active_activity() {
            Some(activity) => {
                tracing::debug!(id = %activity.id, "Loaded activity into form");
                self.draft = activity.clone();
            }
            None => {
                tracing::warn!(
                    active_id = %state.active_id,
                    "Selected activity not found, keeping current draft"
                );
            }
        }
    }
}

fn blank_draft(ids: &dyn IdGenerator) -> Activity {
    Activity {
        id: ids.next_id(),
        category: category::FOOD,
        name: String::new(),
        calories: 0,
    }
}

/// Errors from submitting the form.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Invalid activity: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}
