// ABOUTME: Muscle-balance strategy evening out training volume across muscle groups
// ABOUTME: Raises volume for the two most neglected muscles and trims the most overworked one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RecommendationStrategy, StrategyContext};
use crate::coaching_constants::{
    confidence::{MUSCLE_BALANCE_INCREASE, MUSCLE_BALANCE_REDUCE},
    muscle_balance::MAX_UNDERTRAINED_RECOMMENDATIONS,
};
use crate::recommendation::{
    slugify, AdjustDetails, AdjustmentDirection, AdjustmentMetric, RecommendationAction,
    RecommendationPriority, RecommendationType, WorkoutRecommendation,
};

/// Flags muscle groups trained far below or above the average
pub struct MuscleBalanceStrategy;

impl RecommendationStrategy for MuscleBalanceStrategy {
    fn recommendation_type(&self) -> RecommendationType {
        RecommendationType::MuscleBalance
    }

    fn generate(&self, context: &StrategyContext<'_>) -> Vec<WorkoutRecommendation> {
        let distribution = &context.analysis.muscle_distribution;
        let rounded_average = distribution.average.round();
        let mut recommendations = Vec::new();

        for (index, muscle) in distribution
            .undertrained_muscles
            .iter()
            .take(MAX_UNDERTRAINED_RECOMMENDATIONS)
            .enumerate()
        {
            let count = distribution.count(muscle);
            recommendations.push(WorkoutRecommendation {
                id: format!("muscle-balance-increase-{}", slugify(muscle)),
                recommendation_type: RecommendationType::MuscleBalance,
                priority: if index == 0 {
                    RecommendationPriority::High
                } else {
                    RecommendationPriority::Medium
                },
                title: format!("Increase {muscle} training"),
                description: format!(
                    "{muscle} is getting less work than your other muscle groups."
                ),
                reasoning: vec![
                    format!(
                        "{muscle} trained {count} times vs. an average of {rounded_average} per muscle group in the last 30 days"
                    ),
                    "Imbalanced training raises injury risk and limits overall strength".into(),
                ],
                action: RecommendationAction::Adjust(AdjustDetails {
                    metric: AdjustmentMetric::MuscleVolume,
                    direction: AdjustmentDirection::Increase,
                    subject: Some(muscle.clone()),
                    current_value: Some(f64::from(count)),
                    target_value: Some(rounded_average),
                    duration_days: None,
                }),
                confidence: MUSCLE_BALANCE_INCREASE,
                expires_at: None,
                dismissable: true,
            });
        }

        if let Some(muscle) = distribution.overtrained_muscles.first() {
            let count = distribution.count(muscle);
            recommendations.push(WorkoutRecommendation {
                id: format!("muscle-balance-reduce-{}", slugify(muscle)),
                recommendation_type: RecommendationType::MuscleBalance,
                priority: RecommendationPriority::Medium,
                title: format!("Reduce {muscle} volume"),
                description: format!(
                    "{muscle} is getting considerably more work than the rest of your body."
                ),
                reasoning: vec![
                    format!(
                        "{muscle} trained {count} times vs. an average of {rounded_average} per muscle group in the last 30 days"
                    ),
                    "Shifting some of that volume elsewhere improves recovery and balance".into(),
                ],
                action: RecommendationAction::Adjust(AdjustDetails {
                    metric: AdjustmentMetric::MuscleVolume,
                    direction: AdjustmentDirection::Decrease,
                    subject: Some(muscle.clone()),
                    current_value: Some(f64::from(count)),
                    target_value: Some(rounded_average),
                    duration_days: None,
                }),
                confidence: MUSCLE_BALANCE_REDUCE,
                expires_at: None,
                dismissable: true,
            });
        }

        recommendations
    }
}
