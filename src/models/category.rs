// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Predefined activity categories.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Category ID for food. Calories in this category are consumed.
pub const FOOD: u32 = 1;
/// Category ID for exercise. Calories in this category are burned.
pub const EXERCISE: u32 = 2;

/// A selectable category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
}

/// All categories, in the order they are offered to the user.
pub const CATEGORIES: &[Category] = &[
    Category {
        id: FOOD,
        name: "Food",
    },
    Category {
        id: EXERCISE,
        name: "Exercise",
    },
];
