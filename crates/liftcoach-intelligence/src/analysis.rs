// ABOUTME: Training analysis snapshot types derived from a user's exercise log
// ABOUTME: Volume, frequency, muscle, recovery, progression, variety and pattern indicators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Derived, read-only view of a user's training history over fixed windows.
//!
//! A [`TrainingAnalysis`] is recomputed for every engine call and never
//! persisted.

use crate::coaching_constants::progression_rate::{FAST_RATIO, NORMAL_RATIO, SLOW_RATIO};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Snapshot of everything the strategies reason about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingAnalysis {
    /// Set volume metrics
    pub volume: VolumeMetrics,
    /// Workout frequency metrics
    pub frequency: FrequencyMetrics,
    /// Primary-muscle occurrence tally over the last month
    pub muscle_distribution: MuscleDistribution,
    /// Rest and streak indicators
    pub recovery: RecoveryIndicators,
    /// Personal-record progression indicators
    pub progression: ProgressionIndicators,
    /// Exercise variety indicators
    pub variety: VarietyIndicators,
    /// Habitual scheduling patterns
    pub patterns: PatternIndicators,
}

/// Set volume metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeMetrics {
    /// Sets logged in the last 7 days
    pub total_sets_last_week: u64,
    /// Sets logged in the last 30 days
    pub total_sets_last_month: u64,
    /// Sets per workout over the last 7 days
    pub avg_sets_per_workout: f64,
    /// Direction of weekly set volume
    pub volume_trend: VolumeTrend,
}

/// Volume trend direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeTrend {
    /// Training volume is increasing over time
    Increasing,
    /// Training volume is remaining steady
    Stable,
    /// Training volume is decreasing over time
    Decreasing,
}

/// Workout frequency metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyMetrics {
    /// Entries in the last 7 days
    pub workouts_last_week: usize,
    /// Entries in the last 30 days
    pub workouts_last_month: usize,
    /// Monthly entries divided by 4
    pub avg_workouts_per_week: f64,
    /// Lifetime log length, including undated entries
    pub total_workouts: usize,
}

/// Primary-muscle occurrence tally and its classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleDistribution {
    /// Occurrences per muscle
    pub counts: BTreeMap<String, u32>,
    /// Mean occurrences per distinct muscle
    pub average: f64,
    /// Muscles below half the average, in first-seen order
    pub undertrained_muscles: Vec<String>,
    /// Muscles above one and a half times the average, in first-seen order
    pub overtrained_muscles: Vec<String>,
}

impl MuscleDistribution {
    /// Occurrences for one muscle (0 if never trained)
    #[must_use]
    pub fn count(&self, muscle: &str) -> u32 {
        self.counts.get(muscle).copied().unwrap_or(0)
    }
}

/// Rest and streak indicators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryIndicators {
    /// Whole days since the newest dated entry (999 if none)
    pub days_since_last_workout: i64,
    /// Calendar days in a row with at least one entry
    pub consecutive_workout_days: u32,
    /// 7 minus last-week workouts; negative when training more than once a day
    pub rest_days_last_week: i64,
}

/// Personal-record progression indicators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionIndicators {
    /// Whole days since the newest dated personal record
    pub days_since_last_pr: i64,
    /// Records per workout, categorized
    pub progression_rate: ProgressionRate,
}

/// How quickly personal records accumulate relative to workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressionRate {
    /// More than 0.15 records per workout
    Fast,
    /// More than 0.08 records per workout
    Normal,
    /// More than 0.03 records per workout
    Slow,
    /// At most 0.03 records per workout
    Stalled,
}

impl ProgressionRate {
    /// Categorize a record count against a workout count
    ///
    /// With no workouts at all the rate is reported as normal.
    #[must_use]
    pub fn classify(record_count: usize, workout_count: usize) -> Self {
        if workout_count == 0 {
            return Self::Normal;
        }
        let ratio = record_count as f64 / workout_count as f64;
        if ratio > FAST_RATIO {
            Self::Fast
        } else if ratio > NORMAL_RATIO {
            Self::Normal
        } else if ratio > SLOW_RATIO {
            Self::Slow
        } else {
            Self::Stalled
        }
    }
}

impl fmt::Display for ProgressionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => write!(f, "fast"),
            Self::Normal => write!(f, "normal"),
            Self::Slow => write!(f, "slow"),
            Self::Stalled => write!(f, "stalled"),
        }
    }
}

/// Exercise variety indicators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarietyIndicators {
    /// Distinct exercise names in the last 30 days
    pub unique_exercises_last_month: usize,
    /// Up to three most performed exercises in the last 30 days
    pub most_frequent_exercises: Vec<String>,
    /// Exercises not performed in the last 30 days, oldest first
    pub least_recent_exercises: Vec<String>,
    /// Distinct exercise names in the last 30 days, first-seen order
    pub exercises_last_month: Vec<String>,
}

/// Habitual scheduling patterns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternIndicators {
    /// Weekday names ranked by lifetime occurrence
    pub preferred_workout_days: Vec<String>,
    /// Most common time of day
    pub preferred_workout_time: TimeOfDay,
    /// Mean session duration in seconds over the whole log
    pub avg_workout_duration: f64,
}

/// Coarse time-of-day bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    /// 05:00 to 11:59
    Morning,
    /// 12:00 to 16:59
    Afternoon,
    /// 17:00 to 21:59
    Evening,
    /// 22:00 to 04:59
    Night,
}

impl TimeOfDay {
    /// Bucket for an hour of the day (0-23)
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=21 => Self::Evening,
            _ => Self::Night,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Morning => write!(f, "Morning"),
            Self::Afternoon => write!(f, "Afternoon"),
            Self::Evening => write!(f, "Evening"),
            Self::Night => write!(f, "Night"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progression_rate_boundaries() {
        assert_eq!(ProgressionRate::classify(0, 0), ProgressionRate::Normal);
        assert_eq!(ProgressionRate::classify(0, 10), ProgressionRate::Stalled);
        assert_eq!(ProgressionRate::classify(3, 100), ProgressionRate::Stalled);
        assert_eq!(ProgressionRate::classify(4, 100), ProgressionRate::Slow);
        assert_eq!(ProgressionRate::classify(8, 100), ProgressionRate::Slow);
        assert_eq!(ProgressionRate::classify(9, 100), ProgressionRate::Normal);
        assert_eq!(ProgressionRate::classify(16, 100), ProgressionRate::Fast);
    }

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(19), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(2), TimeOfDay::Night);
    }
}
