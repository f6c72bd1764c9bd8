// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Logged activity model (one food or exercise entry).

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

/// One logged food or exercise record.
///
/// Field names match the local storage format, so a list of these
/// serializes directly to the stored JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Opaque identifier, generated when the form creates a draft
    pub id: String,
    /// Category ID (see `models::category`)
    #[validate(range(min = 1))]
    pub category: u32,
    /// Free-text label
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    /// Calorie count
    #[validate(range(min = 1))]
    pub calories: i64,
}

impl Activity {
    /// Whether this activity counts towards calories consumed.
    pub fn is_food(&self) -> bool {
        self.category == super::category::FOOD
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name"));
    }
    Ok(())
}
