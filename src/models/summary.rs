// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Calorie totals derived from the activity list.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Activity;

/// Calories consumed (food) versus burned (everything else).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CalorieSummary {
    pub consumed: i64,
    pub burned: i64,
    /// `consumed - burned`
    pub net: i64,
}

impl CalorieSummary {
    /// Fold an activity list into totals.
    pub fn from_activities(activities: &[Activity]) -> Self {
        let (consumed, burned) =
            activities
                .iter()
                .fold((0i64, 0i64), |(consumed, burned), activity| {
                    if activity.is_food() {
                        (consumed.saturating_add(activity.calories), burned)
                    } else {
                        (consumed, burned.saturating_add(activity.calories))
                    }
                });

        Self {
            consumed,
            burned,
            net: consumed.saturating_sub(burned),
        }
    }
}
