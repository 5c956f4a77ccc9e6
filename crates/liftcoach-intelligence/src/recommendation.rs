// ABOUTME: Workout recommendation types produced by the strategy generators
// ABOUTME: Recommendation kind, priority ordering and the typed action payload union
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One coaching suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecommendation {
    /// Stable identifier derived from the rule and its subject
    pub id: String,
    /// Strategy that produced the recommendation
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    /// Ordinal urgency
    pub priority: RecommendationPriority,
    /// Short headline
    pub title: String,
    /// One-sentence explanation
    pub description: String,
    /// Ordered supporting statements (never empty)
    pub reasoning: Vec<String>,
    /// What the user is asked to do
    pub action: RecommendationAction,
    /// Self-reported confidence, 0-100
    pub confidence: u8,
    /// When the suggestion stops being relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Whether the user may dismiss it
    pub dismissable: bool,
}

/// Strategy categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationType {
    /// What to train next
    NextWorkout,
    /// Even out muscle group volume
    MuscleBalance,
    /// Rest and return-from-break guidance
    Recovery,
    /// Personal-record attempts and plateaus
    Progression,
    /// Exercise selection breadth
    Variety,
    /// Weekly training frequency
    Volume,
    /// Planned reduced-intensity week
    Deload,
}

impl RecommendationType {
    /// Kebab-case identifier used as the id prefix
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NextWorkout => "next-workout",
            Self::MuscleBalance => "muscle-balance",
            Self::Recovery => "recovery",
            Self::Progression => "progression",
            Self::Variety => "variety",
            Self::Volume => "volume",
            Self::Deload => "deload",
        }
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency, ordered `Low < Medium < High < Urgent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Nice to have
    Low,
    /// Worth doing this week
    Medium,
    /// Do soon
    High,
    /// Do now
    Urgent,
}

impl RecommendationPriority {
    /// Numeric rank used for sorting (urgent = 4 ... low = 1)
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Urgent => 4,
        }
    }
}

/// Action payload, one explicit detail schema per action kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details", rename_all = "lowercase")]
pub enum RecommendationAction {
    /// Perform a specific workout
    Workout(WorkoutDetails),
    /// Take time off
    Rest(RestDetails),
    /// Change a training variable
    Adjust(AdjustDetails),
    /// Try something new
    Explore(ExploreDetails),
}

/// Details for a workout action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDetails {
    /// Muscle group to focus on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_muscle: Option<String>,
    /// Single exercise to focus on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_exercise: Option<String>,
    /// Suggested exercises
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exercises: Vec<String>,
    /// Suggested weekday
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_day: Option<String>,
    /// Suggested time of day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_time: Option<String>,
    /// Weight to beat, when a record exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Intensity guidance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
}

/// Relative session intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Reduced load
    Light,
    /// Usual load
    Moderate,
    /// Maximal effort
    Max,
}

/// Details for a rest action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestDetails {
    /// Number of rest days to take
    pub rest_days: u32,
    /// Whether gentle movement is fine
    pub active_recovery: bool,
    /// Suggested recovery activities
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<String>,
}

/// Details for an adjust action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustDetails {
    /// Training variable to change
    pub metric: AdjustmentMetric,
    /// Which way to change it
    pub direction: AdjustmentDirection,
    /// Muscle or exercise the change applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Current value of the metric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    /// Suggested value of the metric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
    /// How long the change should last
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
}

/// Training variables an adjust action can change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentMetric {
    /// Sessions per muscle group per month
    MuscleVolume,
    /// Workouts per week
    WeeklyFrequency,
    /// Percentage of usual working load
    TrainingLoad,
}

/// Direction of an adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentDirection {
    /// Raise the metric
    Increase,
    /// Lower the metric
    Decrease,
}

/// Details for an explore action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreDetails {
    /// Exercises to try
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exercises: Vec<String>,
    /// Training techniques to try
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strategies: Vec<String>,
}

/// Lowercase, hyphen-separated form of a name for use in ids
#[must_use]
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
