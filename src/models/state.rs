// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Store state and the actions that transform it.

use super::Activity;
use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Full state of the activity store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct ActivityState {
    /// Logged activities in insertion order
    pub activities: Vec<Activity>,
    /// ID of the activity loaded into the form for editing, empty when none
    pub active_id: String,
}

impl ActivityState {
    /// Initial state for a freshly loaded activity list.
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            active_id: String::new(),
        }
    }

    /// Whether an activity is selected for editing.
    pub fn is_editing(&self) -> bool {
        !self.active_id.is_empty()
    }

    /// The activity referenced by `active_id`, if it still exists.
    pub fn active_activity(&self) -> Option<&Activity> {
        if !self.is_editing() {
            return None;
        }
        self.activities.iter().find(|a| a.id == self.active_id)
    }
}

/// Actions accepted by the store.
///
/// Wire format is `{"type": "...", "payload": {...}}`. Any unrecognized
/// `type` decodes to [`ActivityAction::Unknown`] whatever its payload, and
/// `restart-app` ignores its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(tag = "type", content = "payload")]
pub enum ActivityAction {
    /// Append a new activity, or replace the one being edited.
    #[serde(rename = "save-activity")]
    SaveActivity {
        #[serde(rename = "newActivity")]
        new_activity: Activity,
    },
    /// Select an activity for editing (empty ID clears the selection).
    #[serde(rename = "set-activeId")]
    SetActiveId { id: String },
    /// Remove an activity by ID.
    #[serde(rename = "delete-activity")]
    DeleteActivity { id: String },
    /// Discard all activities and the selection.
    #[serde(rename = "restart-app")]
    RestartApp,
    /// Any other action type; leaves state unchanged.
    #[serde(rename = "unknown")]
    Unknown,
}

/// Envelope decoded before the payload is interpreted.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct SavePayload {
    #[serde(rename = "newActivity")]
    new_activity: Activity,
}

#[derive(Deserialize)]
struct IdPayload {
    id: String,
}

impl<'de> Deserialize<'de> for ActivityAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawAction::deserialize(deserializer)?;

        fn payload<T, E>(kind: &str, value: Option<serde_json::Value>) -> Result<T, E>
        where
            T: serde::de::DeserializeOwned,
            E: serde::de::Error,
        {
            let value = value.unwrap_or(serde_json::Value::Null);
            serde_json::from_value(value)
                .map_err(|e| E::custom(format!("invalid payload for {}: {}", kind, e)))
        }

        let action = match raw.kind.as_str() {
            "save-activity" => {
                let SavePayload { new_activity } = payload(&raw.kind, raw.payload)?;
                ActivityAction::SaveActivity { new_activity }
            }
            "set-activeId" => {
                let IdPayload { id } = payload(&raw.kind, raw.payload)?;
                ActivityAction::SetActiveId { id }
            }
            "delete-activity" => {
                let IdPayload { id } = payload(&raw.kind, raw.payload)?;
                ActivityAction::DeleteActivity { id }
            }
            "restart-app" => ActivityAction::RestartApp,
            _ => ActivityAction::Unknown,
        };
        Ok(action)
    }
}

impl ActivityAction {
    /// Tag used on the wire, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ActivityAction::SaveActivity { .. } => "save-activity",
            ActivityAction::SetActiveId { .. } => "set-activeId",
            ActivityAction::DeleteActivity { .. } => "delete-activity",
            ActivityAction::RestartApp => "restart-app",
            ActivityAction::Unknown => "unknown",
        }
    }
}
