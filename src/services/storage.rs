// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local storage for the activity list.
//!
//! The store never reads or writes storage itself. The host loads a snapshot
//! once at startup and writes the list back after each transition.
//! Missing or corrupt data always loads as an empty list.

use crate::models::Activity;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Persistence adapter for the activity list.
pub trait ActivityStorage: Send + Sync {
    /// Load the stored list. Absent or unreadable data yields an empty list.
    fn load(&self) -> Vec<Activity>;

    /// Replace the stored list.
    fn save(&self, activities: &[Activity]) -> Result<(), StorageError>;
}

/// Activity list stored as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "activities.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ActivityStorage for JsonFileStorage {
    fn load(&self) -> Vec<Activity> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No stored activities");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read stored activities, starting empty"
                );
                return Vec::new();
            }
        };

        if data.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Activity>>(&data) {
            Ok(activities) => {
                tracing::info!(
                    path = %self.path.display(),
                    count = activities.len(),
                    "Loaded stored activities"
                );
                activities
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Stored activities are corrupt, starting empty"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, activities: &[Activity]) -> Result<(), StorageError> {
        let json = serde_json::to_string(activities)
            .map_err(|e| StorageError::SerializeError(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::IoError(e.to_string()))?;
        }

        // Write then rename so a crash never leaves a half-written list.
        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| StorageError::IoError(e.to_string()))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::IoError(e.to_string()));
        }

        tracing::debug!(
            path = %self.path.display(),
            count = activities.len(),
            "Saved activities"
        );
        Ok(())
    }
}

/// In-process storage, for tests and throwaway sessions.
///
/// Clones share the same underlying list.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    activities: Arc<Mutex<Vec<Activity>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryStorage {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: Arc::new(Mutex::new(activities)),
            saves: Arc::default(),
        }
    }

    /// Current stored list.
    pub fn snapshot(&self) -> Vec<Activity> {
        self.activities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ActivityStorage for MemoryStorage {
    fn load(&self) -> Vec<Activity> {
        self.snapshot()
    }

    fn save(&self, activities: &[Activity]) -> Result<(), StorageError> {
        *self
            .activities
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = activities.to_vec();
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}

/// Errors from writing the activity list.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to write storage file: {0}")]
    IoError(String),

    #[error("Failed to serialize activities: {0}")]
    SerializeError(String),
}
