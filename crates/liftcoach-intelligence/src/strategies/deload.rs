// ABOUTME: Deload strategy recommending a reduced-load week for stalled, high-volume lifters
// ABOUTME: Fires only when monthly volume, a current streak and stalled progress coincide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RecommendationStrategy, StrategyContext};
use crate::analysis::ProgressionRate;
use crate::coaching_constants::{confidence::DELOAD_WEEK, expiry::DELOAD_DAYS};
use crate::recommendation::{
    AdjustDetails, AdjustmentDirection, AdjustmentMetric, RecommendationAction,
    RecommendationPriority, RecommendationType, WorkoutRecommendation,
};

const DELOAD_LOAD_PERCENT: f64 = 50.0;
const DELOAD_DURATION_DAYS: u32 = 7;

/// Planned reduced-intensity week
pub struct DeloadStrategy;

impl RecommendationStrategy for DeloadStrategy {
    fn recommendation_type(&self) -> RecommendationType {
        RecommendationType::Deload
    }

    fn generate(&self, context: &StrategyContext<'_>) -> Vec<WorkoutRecommendation> {
        let analysis = context.analysis;
        let thresholds = context.thresholds;
        let monthly = analysis.frequency.workouts_last_month;

        let due = monthly >= thresholds.deload_min_monthly_workouts
            && analysis.recovery.consecutive_workout_days >= thresholds.deload_min_consecutive_days
            && analysis.progression.progression_rate == ProgressionRate::Stalled;
        if !due {
            return Vec::new();
        }

        vec![WorkoutRecommendation {
            id: "deload-week".into(),
            recommendation_type: RecommendationType::Deload,
            priority: RecommendationPriority::High,
            title: "Take a deload week".into(),
            description: "Cut your working weights in half for one week to let your body catch up."
                .into(),
            reasoning: vec![
                format!("{monthly} workouts in the last 30 days"),
                format!(
                    "{} consecutive training days",
                    analysis.recovery.consecutive_workout_days
                ),
                "Progress has stalled despite the high training volume".into(),
            ],
            action: RecommendationAction::Adjust(AdjustDetails {
                metric: AdjustmentMetric::TrainingLoad,
                direction: AdjustmentDirection::Decrease,
                subject: None,
                current_value: None,
                target_value: Some(DELOAD_LOAD_PERCENT),
                duration_days: Some(DELOAD_DURATION_DAYS),
            }),
            confidence: DELOAD_WEEK,
            expires_at: context.expires_in_days(DELOAD_DAYS),
            dismissable: true,
        }]
    }
}
