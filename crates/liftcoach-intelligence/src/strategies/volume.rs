// ABOUTME: Volume strategy nudging weekly training frequency into a sustainable band
// ABOUTME: Requires some training history before asking for more sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RecommendationStrategy, StrategyContext};
use crate::coaching_constants::confidence::{VOLUME_INCREASE_FREQUENCY, VOLUME_REDUCE_FREQUENCY};
use crate::recommendation::{
    AdjustDetails, AdjustmentDirection, AdjustmentMetric, RecommendationAction,
    RecommendationPriority, RecommendationType, WorkoutRecommendation,
};

const TARGET_LOW_FREQUENCY: f64 = 3.0;
const TARGET_HIGH_FREQUENCY: f64 = 5.0;

/// Weekly frequency guidance
pub struct VolumeStrategy;

impl VolumeStrategy {
    fn frequency_change(
        direction: AdjustmentDirection,
        current: f64,
        target: f64,
    ) -> AdjustDetails {
        AdjustDetails {
            metric: AdjustmentMetric::WeeklyFrequency,
            direction,
            subject: None,
            current_value: Some(current),
            target_value: Some(target),
            duration_days: None,
        }
    }
}

impl RecommendationStrategy for VolumeStrategy {
    fn recommendation_type(&self) -> RecommendationType {
        RecommendationType::Volume
    }

    fn generate(&self, context: &StrategyContext<'_>) -> Vec<WorkoutRecommendation> {
        let frequency = &context.analysis.frequency;
        let thresholds = context.thresholds;
        let per_week = frequency.avg_workouts_per_week;
        let mut recommendations = Vec::new();

        if per_week < thresholds.low_weekly_frequency
            && frequency.total_workouts > thresholds.min_history_for_frequency
        {
            recommendations.push(WorkoutRecommendation {
                id: "volume-increase-frequency".into(),
                recommendation_type: RecommendationType::Volume,
                priority: RecommendationPriority::Medium,
                title: "Increase training frequency".into(),
                description: "Aim for at least three sessions a week to keep making progress."
                    .into(),
                reasoning: vec![
                    format!("You average {per_week:.1} workouts per week over the last month"),
                    "Two to four sessions a week is the usual range for steady strength gains"
                        .into(),
                ],
                action: RecommendationAction::Adjust(Self::frequency_change(
                    AdjustmentDirection::Increase,
                    per_week,
                    TARGET_LOW_FREQUENCY,
                )),
                confidence: VOLUME_INCREASE_FREQUENCY,
                expires_at: None,
                dismissable: true,
            });
        }

        if per_week > thresholds.high_weekly_frequency {
            recommendations.push(WorkoutRecommendation {
                id: "volume-reduce-frequency".into(),
                recommendation_type: RecommendationType::Volume,
                priority: RecommendationPriority::Medium,
                title: "Reduce training frequency".into(),
                description: "Training this often leaves little time to recover between sessions."
                    .into(),
                reasoning: vec![
                    format!("You average {per_week:.1} workouts per week over the last month"),
                    "Recovery between sessions drives adaptation".into(),
                ],
                action: RecommendationAction::Adjust(Self::frequency_change(
                    AdjustmentDirection::Decrease,
                    per_week,
                    TARGET_HIGH_FREQUENCY,
                )),
                confidence: VOLUME_REDUCE_FREQUENCY,
                expires_at: None,
                dismissable: true,
            });
        }

        recommendations
    }
}
