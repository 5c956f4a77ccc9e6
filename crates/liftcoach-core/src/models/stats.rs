// ABOUTME: Aggregate user statistics accepted alongside the exercise log
// ABOUTME: Carried through the engine without influencing any rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Aggregate statistics maintained by the gamification layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    /// Lifetime number of logged workouts
    pub total_workouts: u32,
    /// Current daily streak
    pub current_streak: u32,
    /// Longest daily streak ever reached
    pub longest_streak: u32,
    /// Lifetime training minutes
    pub total_minutes: u64,
    /// Gamification level
    pub level: u32,
}
