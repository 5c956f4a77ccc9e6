// ABOUTME: Training snapshot loading from JSON files on disk
// ABOUTME: Maps I/O and parse failures onto the shared application error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::TrainingSnapshot;

/// Read and parse a training snapshot document
///
/// # Errors
///
/// Returns a storage error if the file cannot be read, or an input error if
/// its contents are not a valid snapshot
pub fn load_snapshot(path: impl AsRef<Path>) -> AppResult<TrainingSnapshot> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        AppError::storage(format!("Failed to read {}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })?;

    let snapshot = TrainingSnapshot::from_slice(&bytes)
        .map_err(|e| e.with_resource_id(path.display().to_string()))?;

    debug!(
        path = %path.display(),
        entries = snapshot.exercise_log.len(),
        records = snapshot.personal_records.len(),
        catalog = snapshot.catalog.len(),
        "Loaded training snapshot"
    );
    Ok(snapshot)
}
