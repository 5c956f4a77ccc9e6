// ABOUTME: Tests for loading training snapshots from disk
// ABOUTME: Covers lenient date parsing, missing files and malformed documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use liftcoach::errors::ErrorCode;
use liftcoach::input::load_snapshot;
use liftcoach::intelligence::{RecommendationRequest, WorkoutRecommendationEngine};
use liftcoach::intelligence::config::intelligence::RecommendationEngineConfig;
use std::io::Write;
use tempfile::NamedTempFile;

const SNAPSHOT: &str = r#"{
    "exerciseLog": [
        {"date": "2025-06-18T08:30:00Z", "name": "Squat", "durationSeconds": 3000, "totalSets": 5},
        {"date": "2025-06-17", "name": "Bench Press", "durationSeconds": 2400},
        {"date": 1750060800000, "name": "Deadlift", "durationSeconds": 2700},
        {"date": "sometime last week", "name": "Lunge", "durationSeconds": 1200}
    ],
    "personalRecords": {
        "Squat": 140.0,
        "Bench Press": {"weight": 100.0, "achievedAt": "2025-05-01T00:00:00Z"}
    },
    "catalog": [
        {"name": "Squat", "primaryMuscle": "legs"},
        {"name": "Bench Press", "primaryMuscle": "chest"},
        {"name": "Deadlift", "primaryMuscle": "back"}
    ],
    "userStats": {"totalWorkouts": 4, "currentStreak": 3, "level": 2}
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_snapshot_with_mixed_date_forms() {
    let file = write_temp(SNAPSHOT);

    let snapshot = load_snapshot(file.path()).unwrap();

    assert_eq!(snapshot.exercise_log.len(), 4);
    assert_eq!(
        snapshot.exercise_log[1].date(),
        Some(Utc.with_ymd_and_hms(2025, 6, 17, 0, 0, 0).unwrap())
    );
    assert_eq!(
        snapshot.exercise_log[2].date(),
        Some(Utc.with_ymd_and_hms(2025, 6, 16, 8, 0, 0).unwrap())
    );
    assert!(snapshot.exercise_log[3].date().is_none());
    assert_eq!(snapshot.personal_records.best_weight("Squat"), Some(140.0));
    assert_eq!(snapshot.personal_records.best_weight("Bench Press"), Some(100.0));
    assert_eq!(snapshot.user_stats.map(|stats| stats.level), Some(2));
}

#[test]
fn test_undated_entries_count_toward_lifetime_only() {
    let file = write_temp(SNAPSHOT);
    let snapshot = load_snapshot(file.path()).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 18, 19, 0, 0).unwrap();

    let engine = WorkoutRecommendationEngine::with_config(RecommendationEngineConfig::default());
    let analysis = engine.analyze(&RecommendationRequest::from_snapshot(&snapshot, now));

    assert_eq!(analysis.frequency.total_workouts, 4);
    assert_eq!(analysis.frequency.workouts_last_week, 3);
    assert_eq!(analysis.recovery.days_since_last_workout, 0);
    assert_eq!(analysis.progression.days_since_last_pr, 48);
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = load_snapshot(dir.path().join("absent.json")).unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(error.context.resource_id.unwrap().ends_with("absent.json"));
}

#[test]
fn test_malformed_document_is_format_error() {
    let file = write_temp("{\"exerciseLog\": [");

    let error = load_snapshot(file.path()).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidFormat);
}
