// ABOUTME: Rule-based recommendation strategies sharing one generator signature
// ABOUTME: Defines the strategy trait, its read-only context and the default registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation strategies
//!
//! Each strategy is a stateless rule module mapping a [`StrategyContext`] to
//! zero or more candidate recommendations. Strategies never see each other's
//! output; the engine concatenates their candidates in registration order and
//! ranks them afterwards.

mod deload;
mod muscle_balance;
mod next_workout;
mod progression;
mod recovery;
mod variety;
mod volume;

pub use deload::DeloadStrategy;
pub use muscle_balance::MuscleBalanceStrategy;
pub use next_workout::NextWorkoutStrategy;
pub use progression::ProgressionStrategy;
pub use recovery::RecoveryStrategy;
pub use variety::VarietyStrategy;
pub use volume::VolumeStrategy;

use crate::analysis::TrainingAnalysis;
use crate::config::intelligence::RecommendationThresholds;
use crate::recommendation::{RecommendationType, WorkoutRecommendation};
use chrono::{DateTime, Duration, Utc};
use liftcoach_core::models::{ExerciseCatalogEntry, PersonalRecordMap};

/// Read-only inputs available to every strategy
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext<'a> {
    /// Derived training snapshot
    pub analysis: &'a TrainingAnalysis,
    /// Exercise catalog, for suggesting concrete exercises
    pub catalog: &'a [ExerciseCatalogEntry],
    /// Personal records, for PR targets
    pub records: &'a PersonalRecordMap,
    /// Rule trigger thresholds
    pub thresholds: &'a RecommendationThresholds,
    /// Reference instant the analysis was computed for
    pub now: DateTime<Utc>,
}

impl StrategyContext<'_> {
    /// Catalog exercise names whose primary muscle matches, in catalog order
    #[must_use]
    pub fn exercises_for_muscle(&self, muscle: &str, limit: usize) -> Vec<String> {
        self.catalog
            .iter()
            .filter(|exercise| exercise.primary_muscle == muscle)
            .map(|exercise| exercise.name.clone())
            .take(limit)
            .collect()
    }

    /// `now` shifted forward by whole days
    #[must_use]
    pub fn expires_in_days(&self, days: i64) -> Option<DateTime<Utc>> {
        self.now.checked_add_signed(Duration::days(days))
    }
}

/// A rule module producing candidate recommendations
pub trait RecommendationStrategy: Send + Sync {
    /// Category of every recommendation this strategy emits
    fn recommendation_type(&self) -> RecommendationType;

    /// Produce candidates for the given context
    fn generate(&self, context: &StrategyContext<'_>) -> Vec<WorkoutRecommendation>;
}

/// The seven stock strategies in their fixed registration order
#[must_use]
pub fn default_strategies() -> Vec<Box<dyn RecommendationStrategy>> {
    vec![
        Box::new(NextWorkoutStrategy),
        Box::new(MuscleBalanceStrategy),
        Box::new(RecoveryStrategy),
        Box::new(ProgressionStrategy),
        Box::new(VarietyStrategy),
        Box::new(VolumeStrategy),
        Box::new(DeloadStrategy),
    ]
}
