// ABOUTME: Benchmark fixtures generating realistic strength-training histories
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating strength-training histories.

use chrono::{DateTime, Duration, TimeZone, Utc};
use liftcoach::models::{
    ExerciseCatalogEntry, ExerciseLogEntry, PersonalRecord, PersonalRecordMap, TrainingSnapshot,
};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryBatchSize {
    /// Small history (30 entries), a new user
    Small,
    /// Medium history (300 entries), a regular user
    Medium,
    /// Large history (3000 entries), years of training
    Large,
}

impl HistoryBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 30,
            Self::Medium => 300,
            Self::Large => 3000,
        }
    }
}

const EXERCISES: [(&str, &str); 10] = [
    ("Squat", "legs"),
    ("Bench Press", "chest"),
    ("Deadlift", "back"),
    ("Overhead Press", "shoulders"),
    ("Barbell Row", "back"),
    ("Pull-Up", "back"),
    ("Lunge", "legs"),
    ("Dip", "chest"),
    ("Bicep Curl", "arms"),
    ("Plank", "core"),
];

/// Fixed reference instant so runs are comparable
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 18, 19, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Generate a snapshot with roughly three entries per training day
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_snapshot(size: HistoryBatchSize) -> TrainingSnapshot {
    let now = reference_now();
    let exercise_log = (0..size.count())
        .map(|index| {
            let (name, _) = EXERCISES[(index * 7) % EXERCISES.len()];
            let days_ago = (index / 3 + index % 2) as i64;
            let hour = 6 + ((index * 5) % 14) as i64;
            let date = now - Duration::days(days_ago) - Duration::hours(24 - hour);
            ExerciseLogEntry::new(name, date, 1800 + ((index * 137) % 2400) as u64)
                .with_total_sets(3 + (index % 3) as u32)
        })
        .collect();

    let personal_records: PersonalRecordMap = EXERCISES
        .iter()
        .take(5)
        .enumerate()
        .map(|(index, (name, _))| (*name, PersonalRecord::new(60.0 + index as f64 * 20.0)))
        .collect();

    let catalog = EXERCISES
        .iter()
        .map(|(name, muscle)| ExerciseCatalogEntry::new(*name, *muscle))
        .collect();

    TrainingSnapshot {
        exercise_log,
        personal_records,
        catalog,
        user_stats: None,
    }
}
