// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod form;
pub mod reducer;
pub mod storage;
pub mod store;

pub use form::{EntryForm, FormError, FormUpdate, IdGenerator, SequentialIds, UuidGenerator};
pub use reducer::reduce;
pub use storage::{ActivityStorage, JsonFileStorage, MemoryStorage, StorageError};
pub use store::ActivityStore;
