// ABOUTME: Personal record model mapping exercise names to best recorded weights
// ABOUTME: Records deserialize from a bare number or an object with an optional date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::parse_log_date;

/// Heaviest weight logged for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PersonalRecordRepr")]
pub struct PersonalRecord {
    /// Best recorded weight
    pub weight: f64,
    /// When the record was set, if tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achieved_at: Option<DateTime<Utc>>,
}

impl PersonalRecord {
    /// Creates an undated record
    #[must_use]
    pub const fn new(weight: f64) -> Self {
        Self {
            weight,
            achieved_at: None,
        }
    }

    /// Attaches the date the record was set
    #[must_use]
    pub const fn achieved_at(mut self, date: DateTime<Utc>) -> Self {
        self.achieved_at = Some(date);
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PersonalRecordRepr {
    Weight(f64),
    #[serde(rename_all = "camelCase")]
    Detailed {
        weight: f64,
        #[serde(default)]
        achieved_at: Option<serde_json::Value>,
    },
}

impl From<PersonalRecordRepr> for PersonalRecord {
    fn from(repr: PersonalRecordRepr) -> Self {
        match repr {
            PersonalRecordRepr::Weight(weight) => Self::new(weight),
            PersonalRecordRepr::Detailed {
                weight,
                achieved_at,
            } => Self {
                weight,
                achieved_at: achieved_at.as_ref().and_then(parse_log_date),
            },
        }
    }
}

/// Exercise name to personal record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalRecordMap(BTreeMap<String, PersonalRecord>);

impl PersonalRecordMap {
    /// Creates an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record for an exercise
    pub fn insert(&mut self, exercise: impl Into<String>, record: PersonalRecord) {
        self.0.insert(exercise.into(), record);
    }

    /// Number of exercises with a record
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no records exist
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Best weight for an exercise; `None` means "no record"
    #[must_use]
    pub fn best_weight(&self, exercise: &str) -> Option<f64> {
        self.0.get(exercise).map(|record| record.weight)
    }

    /// Date of the most recently set record, considering only dated records
    #[must_use]
    pub fn latest_achieved_at(&self) -> Option<DateTime<Utc>> {
        self.0.values().filter_map(|record| record.achieved_at).max()
    }
}

impl<K: Into<String>> FromIterator<(K, PersonalRecord)> for PersonalRecordMap {
    fn from_iter<I: IntoIterator<Item = (K, PersonalRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
