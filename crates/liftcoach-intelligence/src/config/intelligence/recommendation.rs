// ABOUTME: Recommendation engine configuration for workout suggestions
// ABOUTME: Configures rule trigger thresholds and confidence/length limits for ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration
//!
//! Thresholds decide when each strategy fires; limits decide what survives
//! ranking. Defaults reproduce the stock rule set.

use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Threshold values for triggering recommendations
    pub thresholds: RecommendationThresholds,
    /// Limits applied when ranking recommendations
    pub limits: RecommendationLimits,
}

/// Thresholds for triggering workout recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Suggest the next muscle group only if the last workout is at most this many days old
    pub next_workout_max_days_since: i64,
    /// Consecutive training days that make a rest day mandatory
    pub rest_day_consecutive_days: u32,
    /// Weekly workouts that, with no rest day, trigger "schedule rest days"
    pub busy_week_workouts: usize,
    /// First day of a break that earns a "welcome back" (inclusive)
    pub welcome_back_min_days: i64,
    /// End of the "welcome back" range (exclusive)
    pub welcome_back_max_days: i64,
    /// Days without a record before suggesting a PR attempt
    pub pr_attempt_min_days: i64,
    /// Days without a record, while stalled, before suggesting plateau strategies
    pub plateau_min_days: i64,
    /// Fewer distinct monthly exercises than this triggers a variety suggestion
    pub variety_min_unique_exercises: usize,
    /// Below this weekly average, suggest training more often
    pub low_weekly_frequency: f64,
    /// Above this weekly average, suggest training less often
    pub high_weekly_frequency: f64,
    /// Lifetime log length that must be exceeded before suggesting more frequency
    pub min_history_for_frequency: usize,
    /// Monthly workouts required before a deload is considered
    pub deload_min_monthly_workouts: usize,
    /// Consecutive days required before a deload is considered
    pub deload_min_consecutive_days: u32,
}

/// Limits applied by the ranker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Minimum confidence score (0-100) to include a recommendation
    pub min_confidence: u8,
    /// Maximum total recommendations returned
    pub max_recommendations: usize,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            next_workout_max_days_since: 2,
            rest_day_consecutive_days: 5,
            busy_week_workouts: 5,
            welcome_back_min_days: 4,
            welcome_back_max_days: 14,
            pr_attempt_min_days: 14,
            plateau_min_days: 30,
            variety_min_unique_exercises: 8,
            low_weekly_frequency: 2.0,
            high_weekly_frequency: 6.0,
            min_history_for_frequency: 4,
            deload_min_monthly_workouts: 16,
            deload_min_consecutive_days: 3,
        }
    }
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            min_confidence: 60,
            max_recommendations: 10,
        }
    }
}
