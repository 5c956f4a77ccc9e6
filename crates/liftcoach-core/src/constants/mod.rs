// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Analysis windows, sentinel values and service identifiers for liftcoach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Time windows used when reducing the exercise log
pub mod time_windows {
    /// Length of the "last week" window in days
    pub const WEEK_DAYS: i64 = 7;
    /// Length of the "last month" window in days
    pub const MONTH_DAYS: i64 = 30;
    /// Start of the volume-trend baseline, in days before now (exclusive end of the week window)
    pub const TREND_BASELINE_START_DAYS: i64 = 28;
    /// Number of weeks in the volume-trend baseline
    pub const TREND_BASELINE_WEEKS: f64 = 3.0;
    /// Fixed number of weeks the monthly workout count is divided by
    pub const WEEKS_PER_MONTH: f64 = 4.0;
    /// How many calendar days the consecutive-workout scan looks back
    pub const CONSECUTIVE_SCAN_DAYS: u64 = 14;
    /// Seconds in one day
    pub const SECONDS_PER_DAY: i64 = 86_400;
}

/// Sentinel values substituted when data is absent
pub mod sentinels {
    /// `days_since_last_workout` when the log has no dated entry
    pub const NO_WORKOUT_DAYS: i64 = 999;
    /// `days_since_last_pr` when no personal record carries a date
    pub const UNDATED_PR_DAYS: i64 = 7;
}

/// Service identifiers used in structured logging
pub mod service_names {
    /// Binary / service name
    pub const LIFTCOACH: &str = "liftcoach";
}
