// ABOUTME: Exercise catalog entry used for name-to-muscle lookup
// ABOUTME: Static reference data supplied by an external collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Reference description of an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCatalogEntry {
    /// Exercise name as it appears in the log
    pub name: String,
    /// Muscle group the exercise primarily works
    pub primary_muscle: String,
    /// Other muscle groups involved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_muscles: Vec<String>,
    /// Required equipment, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    /// Free-form category (e.g. "strength", "cardio")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ExerciseCatalogEntry {
    /// Creates an entry with only the fields the engine consumes
    pub fn new(name: impl Into<String>, primary_muscle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_muscle: primary_muscle.into(),
            secondary_muscles: Vec::new(),
            equipment: None,
            category: None,
        }
    }
}
