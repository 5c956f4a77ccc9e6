// ABOUTME: Complete training snapshot document consumed by the engine
// ABOUTME: Bundles exercise log, personal records, catalog and user stats with JSON loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{ExerciseCatalogEntry, ExerciseLogEntry, PersonalRecordMap, UserStats};
use crate::errors::AppResult;

/// Everything the engine needs for one call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSnapshot {
    /// Raw exercise log
    #[serde(default)]
    pub exercise_log: Vec<ExerciseLogEntry>,
    /// Best recorded weight per exercise
    #[serde(default)]
    pub personal_records: PersonalRecordMap,
    /// Exercise reference catalog
    #[serde(default)]
    pub catalog: Vec<ExerciseCatalogEntry>,
    /// Aggregate user statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_stats: Option<UserStats>,
}

impl TrainingSnapshot {
    /// Parse a snapshot from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or does not match the snapshot shape
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a snapshot from raw JSON bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not valid JSON or do not match the snapshot shape
    pub fn from_slice(bytes: &[u8]) -> AppResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
