// ABOUTME: Recovery strategy detecting overreaching streaks and returns from a break
// ABOUTME: Emits at most one rest, schedule-rest or welcome-back recommendation per call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RecommendationStrategy, StrategyContext};
use crate::coaching_constants::{
    confidence::{RECOVERY_REST_DAY, RECOVERY_SCHEDULE_REST, RECOVERY_WELCOME_BACK},
    expiry::SHORT_LIVED_DAYS,
};
use crate::recommendation::{
    Intensity, RecommendationAction, RecommendationPriority, RecommendationType, RestDetails,
    WorkoutDetails, WorkoutRecommendation,
};

/// Rest and return-from-break guidance
///
/// The three rules are mutually exclusive and checked in order of severity.
pub struct RecoveryStrategy;

impl RecoveryStrategy {
    fn rest_day_needed(context: &StrategyContext<'_>, consecutive: u32) -> WorkoutRecommendation {
        WorkoutRecommendation {
            id: "recovery-rest-day".into(),
            recommendation_type: RecommendationType::Recovery,
            priority: RecommendationPriority::Urgent,
            title: "Rest day needed".into(),
            description: format!(
                "You have trained {consecutive} days in a row. Take today off to recover."
            ),
            reasoning: vec![
                format!("{consecutive} consecutive training days without a break"),
                "Muscles grow and repair during rest, not during training".into(),
                "Continuing without rest increases the risk of injury and overtraining".into(),
            ],
            action: RecommendationAction::Rest(RestDetails {
                rest_days: 1,
                active_recovery: true,
                activities: vec![
                    "Light walking".into(),
                    "Stretching".into(),
                    "Foam rolling".into(),
                ],
            }),
            confidence: RECOVERY_REST_DAY,
            expires_at: context.expires_in_days(SHORT_LIVED_DAYS),
            dismissable: false,
        }
    }

    fn schedule_rest(context: &StrategyContext<'_>, workouts: usize) -> WorkoutRecommendation {
        WorkoutRecommendation {
            id: "recovery-schedule-rest".into(),
            recommendation_type: RecommendationType::Recovery,
            priority: RecommendationPriority::High,
            title: "Schedule rest days".into(),
            description: "You have not taken a rest day this week. Plan at least two.".into(),
            reasoning: vec![
                format!("{workouts} workouts logged in the last 7 days with no rest day"),
                "Regular rest days keep performance up across the week".into(),
            ],
            action: RecommendationAction::Rest(RestDetails {
                rest_days: 2,
                active_recovery: true,
                activities: Vec::new(),
            }),
            confidence: RECOVERY_SCHEDULE_REST,
            expires_at: context.expires_in_days(SHORT_LIVED_DAYS),
            dismissable: true,
        }
    }

    fn welcome_back(context: &StrategyContext<'_>, days_since: i64) -> WorkoutRecommendation {
        WorkoutRecommendation {
            id: "recovery-welcome-back".into(),
            recommendation_type: RecommendationType::Recovery,
            priority: RecommendationPriority::Medium,
            title: "Welcome back".into(),
            description: "Ease back in with a lighter session before returning to full intensity."
                .into(),
            reasoning: vec![
                format!("Your last workout was {days_since} days ago"),
                "A lighter first session lowers injury risk after a break".into(),
            ],
            action: RecommendationAction::Workout(WorkoutDetails {
                intensity: Some(Intensity::Light),
                ..WorkoutDetails::default()
            }),
            confidence: RECOVERY_WELCOME_BACK,
            expires_at: context.expires_in_days(SHORT_LIVED_DAYS),
            dismissable: true,
        }
    }
}

impl RecommendationStrategy for RecoveryStrategy {
    fn recommendation_type(&self) -> RecommendationType {
        RecommendationType::Recovery
    }

    fn generate(&self, context: &StrategyContext<'_>) -> Vec<WorkoutRecommendation> {
        let recovery = &context.analysis.recovery;
        let thresholds = context.thresholds;
        let workouts_last_week = context.analysis.frequency.workouts_last_week;

        let recommendation = if recovery.consecutive_workout_days
            >= thresholds.rest_day_consecutive_days
        {
            Self::rest_day_needed(context, recovery.consecutive_workout_days)
        } else if recovery.rest_days_last_week == 0
            && workouts_last_week >= thresholds.busy_week_workouts
        {
            Self::schedule_rest(context, workouts_last_week)
        } else if (thresholds.welcome_back_min_days..thresholds.welcome_back_max_days)
            .contains(&recovery.days_since_last_workout)
        {
            Self::welcome_back(context, recovery.days_since_last_workout)
        } else {
            return Vec::new();
        };

        vec![recommendation]
    }
}
