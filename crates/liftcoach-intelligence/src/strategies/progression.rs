// ABOUTME: Progression strategy proposing personal-record attempts and plateau breakers
// ABOUTME: Uses time since the last PR and the PR-to-workout rate category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RecommendationStrategy, StrategyContext};
use crate::analysis::ProgressionRate;
use crate::coaching_constants::{
    confidence::{PROGRESSION_PLATEAU, PROGRESSION_PR_ATTEMPT},
    limits::PR_ATTEMPT_EXERCISES,
};
use crate::recommendation::{
    slugify, ExploreDetails, Intensity, RecommendationAction, RecommendationPriority,
    RecommendationType, WorkoutDetails, WorkoutRecommendation,
};

const PLATEAU_STRATEGIES: [&str; 4] = [
    "Change your rep range for the next few weeks",
    "Add a drop set to the last set of your main lift",
    "Swap one exercise for a close variation",
    "Slow down the eccentric phase of each rep",
];

/// Suggests PR attempts, or new stimuli when progress has stalled
pub struct ProgressionStrategy;

impl ProgressionStrategy {
    fn pr_attempt(
        context: &StrategyContext<'_>,
        exercise: &str,
        days_since_pr: i64,
    ) -> WorkoutRecommendation {
        let target_weight = context.records.best_weight(exercise);
        let mut reasoning = vec![format!("Your last personal record was {days_since_pr} days ago")];
        match target_weight {
            Some(weight) => reasoning.push(format!("Current {exercise} record: {weight}")),
            None => reasoning.push(format!("No {exercise} record logged yet, so any top set counts")),
        }
        reasoning.push(format!("{exercise} is one of your most trained exercises"));

        WorkoutRecommendation {
            id: format!("progression-pr-{}", slugify(exercise)),
            recommendation_type: RecommendationType::Progression,
            priority: RecommendationPriority::High,
            title: format!("Try for a PR on {exercise}"),
            description: format!(
                "You train {exercise} regularly. Warm up well and attempt a new personal record."
            ),
            reasoning,
            action: RecommendationAction::Workout(WorkoutDetails {
                target_exercise: Some(exercise.to_owned()),
                target_weight,
                intensity: Some(Intensity::Max),
                ..WorkoutDetails::default()
            }),
            confidence: PROGRESSION_PR_ATTEMPT,
            expires_at: None,
            dismissable: true,
        }
    }

    fn plateau(days_since_pr: i64) -> WorkoutRecommendation {
        WorkoutRecommendation {
            id: "progression-plateau".into(),
            recommendation_type: RecommendationType::Progression,
            priority: RecommendationPriority::High,
            title: "Break through your plateau".into(),
            description: "Your progress has stalled. Change the stimulus to start improving again."
                .into(),
            reasoning: vec![
                format!("No new personal record in {days_since_pr} days"),
                "Very few personal records relative to the number of workouts logged".into(),
            ],
            action: RecommendationAction::Explore(ExploreDetails {
                exercises: Vec::new(),
                strategies: PLATEAU_STRATEGIES.iter().map(|&text| text.to_owned()).collect(),
            }),
            confidence: PROGRESSION_PLATEAU,
            expires_at: None,
            dismissable: true,
        }
    }
}

impl RecommendationStrategy for ProgressionStrategy {
    fn recommendation_type(&self) -> RecommendationType {
        RecommendationType::Progression
    }

    fn generate(&self, context: &StrategyContext<'_>) -> Vec<WorkoutRecommendation> {
        let progression = &context.analysis.progression;
        let days_since_pr = progression.days_since_last_pr;
        let stalled = progression.progression_rate == ProgressionRate::Stalled;
        let mut recommendations = Vec::new();

        if days_since_pr >= context.thresholds.pr_attempt_min_days && !stalled {
            recommendations.extend(
                context
                    .analysis
                    .variety
                    .most_frequent_exercises
                    .iter()
                    .take(PR_ATTEMPT_EXERCISES)
                    .map(|exercise| Self::pr_attempt(context, exercise, days_since_pr)),
            );
        }

        if stalled && days_since_pr >= context.thresholds.plateau_min_days {
            recommendations.push(Self::plateau(days_since_pr));
        }

        recommendations
    }
}
