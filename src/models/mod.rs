// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod category;
pub mod state;
pub mod summary;

pub use activity::Activity;
pub use category::Category;
pub use state::{ActivityAction, ActivityState};
pub use summary::CalorieSummary;
