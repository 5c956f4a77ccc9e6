// ABOUTME: Next-workout strategy suggesting what to train in the upcoming session
// ABOUTME: Targets undertrained muscles after recent training and follows weekday habits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RecommendationStrategy, StrategyContext};
use crate::coaching_constants::{
    confidence::{NEXT_WORKOUT_MUSCLE, NEXT_WORKOUT_PATTERN},
    expiry::SHORT_LIVED_DAYS,
    limits::SUGGESTED_EXERCISES,
};
use crate::recommendation::{
    slugify, RecommendationAction, RecommendationPriority, RecommendationType,
    WorkoutDetails, WorkoutRecommendation,
};

/// Suggests the focus of the next session
pub struct NextWorkoutStrategy;

impl NextWorkoutStrategy {
    fn muscle_focus(context: &StrategyContext<'_>, muscle: &str) -> WorkoutRecommendation {
        let count = context.analysis.muscle_distribution.count(muscle);
        let exercises = context.exercises_for_muscle(muscle, SUGGESTED_EXERCISES);

        let mut reasoning = vec![
            format!("{muscle} was trained {count} times in the last 30 days, below your other muscle groups"),
            format!(
                "Your last workout was {} day(s) ago, so you are ready for another session",
                context.analysis.recovery.days_since_last_workout
            ),
        ];
        if exercises.is_empty() {
            reasoning.push(format!("No catalog exercises are tagged for {muscle} yet"));
        }

        WorkoutRecommendation {
            id: format!("next-workout-muscle-{}", slugify(muscle)),
            recommendation_type: RecommendationType::NextWorkout,
            priority: RecommendationPriority::High,
            title: format!("Train {muscle} next"),
            description: format!("Make {muscle} the focus of your next workout to keep your training balanced."),
            reasoning,
            action: RecommendationAction::Workout(WorkoutDetails {
                target_muscle: Some(muscle.to_owned()),
                exercises,
                ..WorkoutDetails::default()
            }),
            confidence: NEXT_WORKOUT_MUSCLE,
            expires_at: context.expires_in_days(SHORT_LIVED_DAYS),
            dismissable: true,
        }
    }

    fn pattern_based(context: &StrategyContext<'_>, day: &str) -> WorkoutRecommendation {
        let time = context.analysis.patterns.preferred_workout_time.to_string();
        WorkoutRecommendation {
            id: format!("next-workout-pattern-{}", slugify(day)),
            recommendation_type: RecommendationType::NextWorkout,
            priority: RecommendationPriority::Medium,
            title: "Keep your routine going".into(),
            description: format!("You train most often on {day}s. Plan your next session around that habit."),
            reasoning: vec![
                format!("{day} is your most frequent training day"),
                format!("Most of your sessions happen in the {}", time.to_lowercase()),
                "You already trained today, so plan ahead rather than adding another session".into(),
            ],
            action: RecommendationAction::Workout(WorkoutDetails {
                suggested_day: Some(day.to_owned()),
                suggested_time: Some(time),
                ..WorkoutDetails::default()
            }),
            confidence: NEXT_WORKOUT_PATTERN,
            expires_at: context.expires_in_days(SHORT_LIVED_DAYS),
            dismissable: true,
        }
    }
}

impl RecommendationStrategy for NextWorkoutStrategy {
    fn recommendation_type(&self) -> RecommendationType {
        RecommendationType::NextWorkout
    }

    fn generate(&self, context: &StrategyContext<'_>) -> Vec<WorkoutRecommendation> {
        let analysis = context.analysis;
        let days_since = analysis.recovery.days_since_last_workout;
        let mut recommendations = Vec::new();

        if days_since <= context.thresholds.next_workout_max_days_since {
            if let Some(muscle) = analysis.muscle_distribution.undertrained_muscles.first() {
                recommendations.push(Self::muscle_focus(context, muscle));
            }
        }

        if days_since == 0 {
            if let Some(day) = analysis.patterns.preferred_workout_days.first() {
                recommendations.push(Self::pattern_based(context, day));
            }
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::intelligence::RecommendationThresholds;
    use crate::strategies::test_support::{catalog, context, quiet_analysis};
    use liftcoach_core::models::PersonalRecordMap;

    #[test]
    fn test_suggests_undertrained_muscle_with_catalog_exercises() {
        let mut analysis = quiet_analysis();
        analysis.muscle_distribution.undertrained_muscles = vec!["legs".into(), "back".into()];
        let catalog = catalog();
        let records = PersonalRecordMap::new();
        let thresholds = RecommendationThresholds::default();

        let recs = NextWorkoutStrategy.generate(&context(&analysis, &catalog, &records, &thresholds));

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, "next-workout-muscle-legs");
        assert_eq!(recs[0].priority, RecommendationPriority::High);
        assert_eq!(recs[0].confidence, 85);
        let RecommendationAction::Workout(details) = &recs[0].action else {
            panic!("expected workout action");
        };
        assert_eq!(details.exercises, vec!["Squat", "Lunge", "Leg Press"]);
    }

    #[test]
    fn test_no_muscle_focus_after_long_break() {
        let mut analysis = quiet_analysis();
        analysis.recovery.days_since_last_workout = 3;
        analysis.muscle_distribution.undertrained_muscles = vec!["legs".into()];
        let catalog = catalog();
        let records = PersonalRecordMap::new();
        let thresholds = RecommendationThresholds::default();

        let recs = NextWorkoutStrategy.generate(&context(&analysis, &catalog, &records, &thresholds));
        assert!(recs.is_empty());
    }

    #[test]
    fn test_pattern_suggestion_only_on_training_day() {
        let mut analysis = quiet_analysis();
        analysis.patterns.preferred_workout_days = vec!["Monday".into(), "Thursday".into()];
        let catalog = catalog();
        let records = PersonalRecordMap::new();
        let thresholds = RecommendationThresholds::default();

        let recs = NextWorkoutStrategy.generate(&context(&analysis, &catalog, &records, &thresholds));
        assert!(recs.is_empty());

        analysis.recovery.days_since_last_workout = 0;
        let recs = NextWorkoutStrategy.generate(&context(&analysis, &catalog, &records, &thresholds));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, RecommendationPriority::Medium);
        assert_eq!(recs[0].confidence, 75);
        assert_eq!(recs[0].id, "next-workout-pattern-monday");
    }
}
