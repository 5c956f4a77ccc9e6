// ABOUTME: Workout recommendation engine running the analyzer, every strategy and the ranker
// ABOUTME: Single entry point turning a training history into an ordered list of suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout recommendation engine
//!
//! A call flows `analyze -> every registered strategy -> rank`. The engine
//! holds no per-user state, so one instance can serve any number of calls.

use chrono::{DateTime, Utc};
use liftcoach_core::models::{
    ExerciseCatalogEntry, ExerciseLogEntry, PersonalRecordMap, TrainingSnapshot, UserStats,
};
use tracing::{debug, info};

use crate::analysis::TrainingAnalysis;
use crate::analyzer::TrainingAnalyzer;
use crate::config::intelligence::{
    IntelligenceConfig, RecommendationEngineConfig, RecommendationLimits, MAX_CONFIDENCE,
    MAX_RECOMMENDATIONS_CEILING, MIN_CONFIDENCE_FLOOR,
};
use crate::recommendation::WorkoutRecommendation;
use crate::strategies::{default_strategies, RecommendationStrategy, StrategyContext};

/// Borrowed inputs for one engine call
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRequest<'a> {
    /// Raw exercise log
    pub log: &'a [ExerciseLogEntry],
    /// Best recorded weight per exercise
    pub records: &'a PersonalRecordMap,
    /// Exercise reference catalog
    pub catalog: &'a [ExerciseCatalogEntry],
    /// Aggregate user statistics, informational only
    pub user_stats: Option<&'a UserStats>,
    /// Reference instant all windows are measured from
    pub now: DateTime<Utc>,
}

impl<'a> RecommendationRequest<'a> {
    /// Build a request without user statistics
    #[must_use]
    pub fn new(
        log: &'a [ExerciseLogEntry],
        records: &'a PersonalRecordMap,
        catalog: &'a [ExerciseCatalogEntry],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            log,
            records,
            catalog,
            user_stats: None,
            now,
        }
    }

    /// Attach user statistics
    #[must_use]
    pub fn with_user_stats(mut self, stats: &'a UserStats) -> Self {
        self.user_stats = Some(stats);
        self
    }

    /// Borrow every input from a loaded snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: &'a TrainingSnapshot, now: DateTime<Utc>) -> Self {
        Self {
            log: &snapshot.exercise_log,
            records: &snapshot.personal_records,
            catalog: &snapshot.catalog,
            user_stats: snapshot.user_stats.as_ref(),
            now,
        }
    }
}

/// Rule-based workout recommendation engine
pub struct WorkoutRecommendationEngine {
    config: RecommendationEngineConfig,
    strategies: Vec<Box<dyn RecommendationStrategy>>,
}

impl Default for WorkoutRecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutRecommendationEngine {
    /// Create an engine with the global configuration and the stock strategies
    #[must_use]
    pub fn new() -> Self {
        let global_config = IntelligenceConfig::global();
        Self::with_config(global_config.recommendation_engine.clone())
    }

    /// Create an engine with explicit configuration and the stock strategies
    #[must_use]
    pub fn with_config(config: RecommendationEngineConfig) -> Self {
        Self {
            config,
            strategies: default_strategies(),
        }
    }

    /// Create an engine with explicit configuration and strategies
    #[must_use]
    pub fn with_strategies(
        config: RecommendationEngineConfig,
        strategies: Vec<Box<dyn RecommendationStrategy>>,
    ) -> Self {
        Self { config, strategies }
    }

    /// Append a strategy after the ones already registered
    pub fn register_strategy(&mut self, strategy: Box<dyn RecommendationStrategy>) {
        self.strategies.push(strategy);
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommendationEngineConfig {
        &self.config
    }

    /// Compute the training analysis for a request without generating recommendations
    #[must_use]
    pub fn analyze(&self, request: &RecommendationRequest<'_>) -> TrainingAnalysis {
        TrainingAnalyzer::analyze(request.log, request.records, request.catalog, request.now)
    }

    /// Run every strategy in registration order and concatenate their candidates
    #[must_use]
    pub fn collect_candidates(
        &self,
        analysis: &TrainingAnalysis,
        request: &RecommendationRequest<'_>,
    ) -> Vec<WorkoutRecommendation> {
        let context = StrategyContext {
            analysis,
            catalog: request.catalog,
            records: request.records,
            thresholds: &self.config.thresholds,
            now: request.now,
        };

        let mut candidates = Vec::new();
        for strategy in &self.strategies {
            let produced = strategy.generate(&context);
            debug!(
                strategy = %strategy.recommendation_type(),
                count = produced.len(),
                "Strategy produced candidates"
            );
            candidates.extend(produced);
        }
        candidates
    }

    /// Produce the final ranked recommendation list
    #[must_use]
    pub fn generate_recommendations(
        &self,
        request: &RecommendationRequest<'_>,
    ) -> Vec<WorkoutRecommendation> {
        if let Some(stats) = request.user_stats {
            debug!(
                total_workouts = stats.total_workouts,
                current_streak = stats.current_streak,
                level = stats.level,
                "User stats supplied"
            );
        }

        let analysis = self.analyze(request);
        let candidates = self.collect_candidates(&analysis, request);
        let candidate_count = candidates.len();
        let recommendations = rank_recommendations(candidates, &self.config.limits);

        info!(
            entries = request.log.len(),
            candidates = candidate_count,
            returned = recommendations.len(),
            "Generated workout recommendations"
        );
        recommendations
    }
}

/// Filter by confidence, order by priority then confidence, and truncate
///
/// The sort is stable, so candidates that tie on both keys keep their
/// strategy registration order. Limits are clamped to the 60 confidence
/// floor and the ten item ceiling, and candidates above 100 confidence are
/// dropped, whatever configuration the engine was built with.
#[must_use]
pub fn rank_recommendations(
    candidates: Vec<WorkoutRecommendation>,
    limits: &RecommendationLimits,
) -> Vec<WorkoutRecommendation> {
    let min_confidence = limits.min_confidence.max(MIN_CONFIDENCE_FLOOR);
    let max_recommendations = limits.max_recommendations.min(MAX_RECOMMENDATIONS_CEILING);

    let mut ranked: Vec<_> = candidates
        .into_iter()
        .filter(|candidate| (min_confidence..=MAX_CONFIDENCE).contains(&candidate.confidence))
        .collect();

    ranked.sort_by(|a, b| {
        b.priority
            .rank()
            .cmp(&a.priority.rank())
            .then_with(|| b.confidence.cmp(&a.confidence))
    });
    ranked.truncate(max_recommendations);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::{
        ExploreDetails, RecommendationAction, RecommendationPriority, RecommendationType,
    };
    use crate::strategies::test_support::now;

    fn candidate(id: &str, priority: RecommendationPriority, confidence: u8) -> WorkoutRecommendation {
        WorkoutRecommendation {
            id: id.into(),
            recommendation_type: RecommendationType::Variety,
            priority,
            title: id.into(),
            description: id.into(),
            reasoning: vec![id.into()],
            action: RecommendationAction::Explore(ExploreDetails::default()),
            confidence,
            expires_at: None,
            dismissable: true,
        }
    }

    #[test]
    fn test_rank_filters_sorts_and_truncates() {
        let candidates = vec![
            candidate("low", RecommendationPriority::Low, 65),
            candidate("weak", RecommendationPriority::Urgent, 59),
            candidate("high-75", RecommendationPriority::High, 75),
            candidate("high-90", RecommendationPriority::High, 90),
            candidate("urgent", RecommendationPriority::Urgent, 95),
        ];

        let ranked = rank_recommendations(candidates, &RecommendationLimits::default());
        let ids: Vec<_> = ranked.iter().map(|rec| rec.id.as_str()).collect();
        assert_eq!(ids, vec!["urgent", "high-90", "high-75", "low"]);
    }

    #[test]
    fn test_rank_keeps_registration_order_on_ties() {
        let candidates = vec![
            candidate("first", RecommendationPriority::Medium, 80),
            candidate("second", RecommendationPriority::Medium, 80),
        ];
        let ranked = rank_recommendations(candidates, &RecommendationLimits::default());
        assert_eq!(ranked[0].id, "first");
        assert_eq!(ranked[1].id, "second");
    }

    #[test]
    fn test_rank_respects_max_recommendations() {
        let candidates = (0..15)
            .map(|i| candidate(&format!("c{i}"), RecommendationPriority::Medium, 70))
            .collect();
        let limits = RecommendationLimits {
            min_confidence: 60,
            max_recommendations: 10,
        };
        let ranked = rank_recommendations(candidates, &limits);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[9].id, "c9");
    }

    #[test]
    fn test_empty_history_produces_no_frequency_advice() {
        let engine = WorkoutRecommendationEngine::with_config(RecommendationEngineConfig::default());
        let records = PersonalRecordMap::new();
        let request = RecommendationRequest::new(&[], &records, &[], now());

        let analysis = engine.analyze(&request);
        assert_eq!(analysis.recovery.days_since_last_workout, 999);

        let recommendations = engine.generate_recommendations(&request);
        assert!(recommendations
            .iter()
            .all(|rec| rec.id != "volume-increase-frequency"));
    }

    struct AlwaysStrategy;

    impl RecommendationStrategy for AlwaysStrategy {
        fn recommendation_type(&self) -> RecommendationType {
            RecommendationType::Variety
        }

        fn generate(&self, _context: &StrategyContext<'_>) -> Vec<WorkoutRecommendation> {
            vec![candidate("custom", RecommendationPriority::Urgent, 99)]
        }
    }

    #[test]
    fn test_registered_strategy_participates_in_ranking() {
        let mut engine =
            WorkoutRecommendationEngine::with_strategies(RecommendationEngineConfig::default(), vec![]);
        engine.register_strategy(Box::new(AlwaysStrategy));
        let records = PersonalRecordMap::new();
        let request = RecommendationRequest::new(&[], &records, &[], now());

        let recommendations = engine.generate_recommendations(&request);
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].id, "custom");
    }

    #[test]
    fn test_rank_clamps_out_of_range_limits() {
        let mut candidates: Vec<_> = (0..15)
            .map(|i| candidate(&format!("c{i}"), RecommendationPriority::Medium, 70))
            .collect();
        candidates.push(candidate("weak", RecommendationPriority::Urgent, 20));
        let limits = RecommendationLimits {
            min_confidence: 0,
            max_recommendations: 100,
        };

        let ranked = rank_recommendations(candidates, &limits);
        assert_eq!(ranked.len(), MAX_RECOMMENDATIONS_CEILING);
        assert!(ranked.iter().all(|rec| rec.id != "weak"));
    }

    struct OverconfidentStrategy;

    impl RecommendationStrategy for OverconfidentStrategy {
        fn recommendation_type(&self) -> RecommendationType {
            RecommendationType::Variety
        }

        fn generate(&self, _context: &StrategyContext<'_>) -> Vec<WorkoutRecommendation> {
            (0..12)
                .map(|i| candidate(&format!("extra-{i}"), RecommendationPriority::High, 70))
                .chain([candidate("impossible", RecommendationPriority::Urgent, 150)])
                .collect()
        }
    }

    #[test]
    fn test_unvalidated_config_cannot_break_output_bounds() {
        let config = RecommendationEngineConfig {
            limits: RecommendationLimits {
                min_confidence: 0,
                max_recommendations: 100,
            },
            ..RecommendationEngineConfig::default()
        };
        let mut engine = WorkoutRecommendationEngine::with_config(config);
        engine.register_strategy(Box::new(OverconfidentStrategy));
        let records = PersonalRecordMap::new();
        let request = RecommendationRequest::new(&[], &records, &[], now());

        let recommendations = engine.generate_recommendations(&request);
        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS_CEILING);
        assert!(recommendations.iter().all(|rec| rec.id != "impossible"));
        assert!(recommendations
            .iter()
            .all(|rec| (MIN_CONFIDENCE_FLOOR..=MAX_CONFIDENCE).contains(&rec.confidence)));
    }
}
