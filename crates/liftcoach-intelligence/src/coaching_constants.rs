// ABOUTME: Fixed coaching constants for muscle balance, progression and confidence levels
// ABOUTME: Thresholds that classify training history and score each recommendation rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coaching constants
//!
//! Values here are fixed properties of the rule set. Thresholds that deployments
//! may reasonably tune live in [`crate::config::intelligence::RecommendationThresholds`].

/// Muscle distribution classification relative to the mean occurrence count
pub mod muscle_balance {
    /// A muscle trained less than this fraction of the average is undertrained
    pub const UNDERTRAINED_RATIO: f64 = 0.5;
    /// A muscle trained more than this multiple of the average is overtrained
    pub const OVERTRAINED_RATIO: f64 = 1.5;
    /// How many undertrained muscles receive an "increase training" item
    pub const MAX_UNDERTRAINED_RECOMMENDATIONS: usize = 2;
}

/// Personal-record rate per workout that separates progression categories
pub mod progression_rate {
    /// Above this ratio progression is fast
    pub const FAST_RATIO: f64 = 0.15;
    /// Above this ratio progression is normal
    pub const NORMAL_RATIO: f64 = 0.08;
    /// Above this ratio progression is slow; at or below it progression is stalled
    pub const SLOW_RATIO: f64 = 0.03;
}

/// Volume trend classification
pub mod volume_trend {
    /// Relative change versus the baseline week that counts as a trend
    pub const TREND_CHANGE_RATIO: f64 = 0.10;
}

/// List sizes
pub mod limits {
    /// Exercises listed in "most frequent"
    pub const MOST_FREQUENT_EXERCISES: usize = 3;
    /// Exercises listed in "least recent"
    pub const LEAST_RECENT_EXERCISES: usize = 3;
    /// Catalog exercises suggested for one muscle or for variety
    pub const SUGGESTED_EXERCISES: usize = 5;
    /// Frequent exercises that receive a PR attempt suggestion
    pub const PR_ATTEMPT_EXERCISES: usize = 2;
}

/// Self-reported confidence per rule (0-100)
pub mod confidence {
    /// Train an undertrained muscle next
    pub const NEXT_WORKOUT_MUSCLE: u8 = 85;
    /// Follow the usual weekday pattern
    pub const NEXT_WORKOUT_PATTERN: u8 = 75;
    /// Increase training for an undertrained muscle
    pub const MUSCLE_BALANCE_INCREASE: u8 = 90;
    /// Reduce volume for an overtrained muscle
    pub const MUSCLE_BALANCE_REDUCE: u8 = 80;
    /// Mandatory rest day after a long streak
    pub const RECOVERY_REST_DAY: u8 = 95;
    /// Schedule rest days in a packed week
    pub const RECOVERY_SCHEDULE_REST: u8 = 88;
    /// Ease back in after a break
    pub const RECOVERY_WELCOME_BACK: u8 = 85;
    /// Attempt a new personal record
    pub const PROGRESSION_PR_ATTEMPT: u8 = 82;
    /// Break through a plateau
    pub const PROGRESSION_PLATEAU: u8 = 75;
    /// Add exercise variety
    pub const VARIETY_ADD: u8 = 70;
    /// Revisit a neglected exercise
    pub const VARIETY_REVISIT: u8 = 65;
    /// Train more often
    pub const VOLUME_INCREASE_FREQUENCY: u8 = 80;
    /// Train less often
    pub const VOLUME_REDUCE_FREQUENCY: u8 = 75;
    /// Take a deload week
    pub const DELOAD_WEEK: u8 = 85;
}

/// Recommendation lifetimes
pub mod expiry {
    /// Short-lived suggestions (next workout, recovery)
    pub const SHORT_LIVED_DAYS: i64 = 1;
    /// Deload suggestions stay relevant for a week
    pub const DELOAD_DAYS: i64 = 7;
}
