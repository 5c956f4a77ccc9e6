// ABOUTME: Variety strategy widening exercise selection and reviving neglected movements
// ABOUTME: Suggests untried catalog exercises and revisiting the oldest dropped exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RecommendationStrategy, StrategyContext};
use crate::coaching_constants::{
    confidence::{VARIETY_ADD, VARIETY_REVISIT},
    limits::SUGGESTED_EXERCISES,
};
use crate::recommendation::{
    slugify, ExploreDetails, RecommendationAction, RecommendationPriority, RecommendationType,
    WorkoutDetails, WorkoutRecommendation,
};

/// Flags a narrow exercise selection
pub struct VarietyStrategy;

impl VarietyStrategy {
    fn untried_exercises(context: &StrategyContext<'_>) -> Vec<String> {
        let recent = &context.analysis.variety.exercises_last_month;
        context
            .catalog
            .iter()
            .filter(|exercise| !recent.contains(&exercise.name))
            .map(|exercise| exercise.name.clone())
            .take(SUGGESTED_EXERCISES)
            .collect()
    }
}

impl RecommendationStrategy for VarietyStrategy {
    fn recommendation_type(&self) -> RecommendationType {
        RecommendationType::Variety
    }

    fn generate(&self, context: &StrategyContext<'_>) -> Vec<WorkoutRecommendation> {
        let variety = &context.analysis.variety;
        let mut recommendations = Vec::new();

        if variety.unique_exercises_last_month < context.thresholds.variety_min_unique_exercises {
            recommendations.push(WorkoutRecommendation {
                id: "variety-add-exercises".into(),
                recommendation_type: RecommendationType::Variety,
                priority: RecommendationPriority::Medium,
                title: "Add exercise variety".into(),
                description: "Rotate in a few new exercises to train your muscles from new angles."
                    .into(),
                reasoning: vec![
                    format!(
                        "Only {} different exercises in the last 30 days",
                        variety.unique_exercises_last_month
                    ),
                    "New movements recruit muscles differently and help avoid plateaus".into(),
                ],
                action: RecommendationAction::Explore(ExploreDetails {
                    exercises: Self::untried_exercises(context),
                    strategies: Vec::new(),
                }),
                confidence: VARIETY_ADD,
                expires_at: None,
                dismissable: true,
            });
        }

        if let Some(exercise) = variety.least_recent_exercises.first() {
            recommendations.push(WorkoutRecommendation {
                id: format!("variety-revisit-{}", slugify(exercise)),
                recommendation_type: RecommendationType::Variety,
                priority: RecommendationPriority::Low,
                title: format!("Revisit {exercise}"),
                description: format!("You have not done {exercise} in over a month."),
                reasoning: vec![
                    format!("{exercise} is in your history but missing from the last 30 days"),
                    "Returning to familiar movements keeps skills and strength from fading".into(),
                ],
                action: RecommendationAction::Workout(WorkoutDetails {
                    target_exercise: Some(exercise.clone()),
                    ..WorkoutDetails::default()
                }),
                confidence: VARIETY_REVISIT,
                expires_at: None,
                dismissable: true,
            });
        }

        recommendations
    }
}
