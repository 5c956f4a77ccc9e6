// ABOUTME: Exercise log entry model with lenient date parsing
// ABOUTME: Entries with malformed dates are kept but excluded from date-based metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// One logged exercise from the user's training history
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use liftcoach_core::models::ExerciseLogEntry;
///
/// let entry = ExerciseLogEntry::new("Bench Press", Utc::now(), 1800).with_total_sets(4);
/// assert_eq!(entry.name(), "Bench Press");
/// assert_eq!(entry.total_sets(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLogEntry {
    /// When the exercise was performed; `None` when the stored value was malformed
    #[serde(
        default,
        deserialize_with = "deserialize_log_date",
        skip_serializing_if = "Option::is_none"
    )]
    date: Option<DateTime<Utc>>,
    /// Exercise name, matched exactly against the catalog
    name: String,
    /// Session duration in seconds
    #[serde(default)]
    duration_seconds: u64,
    /// Number of sets performed (absent means 0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_sets: Option<u32>,
}

impl ExerciseLogEntry {
    /// Creates a dated entry without a set count
    pub fn new(name: impl Into<String>, date: DateTime<Utc>, duration_seconds: u64) -> Self {
        Self {
            date: Some(date),
            name: name.into(),
            duration_seconds,
            total_sets: None,
        }
    }

    /// Creates an entry whose stored date could not be parsed
    pub fn undated(name: impl Into<String>, duration_seconds: u64) -> Self {
        Self {
            date: None,
            name: name.into(),
            duration_seconds,
            total_sets: None,
        }
    }

    /// Sets the number of sets performed
    #[must_use]
    pub fn with_total_sets(mut self, total_sets: u32) -> Self {
        self.total_sets = Some(total_sets);
        self
    }

    /// Returns the date, or `None` if it was malformed
    #[must_use]
    pub const fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Returns the exercise name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the duration in seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    /// Returns the set count, defaulting to 0 when absent
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.total_sets.unwrap_or(0)
    }

    /// Whether the entry falls on or after `cutoff`; undated entries never do
    #[must_use]
    pub fn is_on_or_after(&self, cutoff: DateTime<Utc>) -> bool {
        self.date.is_some_and(|date| date >= cutoff)
    }
}

/// Parse a stored log date
///
/// Accepts RFC 3339 timestamps, plain `YYYY-MM-DD` dates (midnight UTC) and
/// integer epoch milliseconds. Anything else yields `None`.
#[must_use]
pub fn parse_log_date(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::String(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .map(|naive| naive.and_utc())
            }),
        serde_json::Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

fn deserialize_log_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = raw.as_ref().and_then(parse_log_date);
    if parsed.is_none() {
        debug!(raw = ?raw, "Exercise log entry has no usable date; excluding it from date-based metrics");
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_parses_rfc3339_and_plain_dates() {
        let rfc = parse_log_date(&json!("2025-03-04T18:30:00Z"));
        assert_eq!(rfc, Some(Utc.with_ymd_and_hms(2025, 3, 4, 18, 30, 0).unwrap()));

        let plain = parse_log_date(&json!("2025-03-04"));
        assert_eq!(plain, Some(Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0).unwrap()));

        let millis = parse_log_date(&json!(1_741_046_400_000_i64));
        assert_eq!(millis, Some(Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_malformed_date_becomes_none() {
        let entry: ExerciseLogEntry = serde_json::from_value(json!({
            "date": "last tuesday",
            "name": "Squat",
            "durationSeconds": 900,
        }))
        .unwrap();

        assert!(entry.date().is_none());
        assert_eq!(entry.total_sets(), 0);
        assert!(!entry.is_on_or_after(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_missing_date_and_sets_default() {
        let entry: ExerciseLogEntry =
            serde_json::from_value(json!({ "name": "Row", "durationSeconds": 600 })).unwrap();
        assert!(entry.date().is_none());
        assert_eq!(entry.duration_seconds(), 600);
    }
}
