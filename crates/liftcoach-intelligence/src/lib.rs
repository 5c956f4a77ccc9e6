// ABOUTME: Training analysis and rule-based workout recommendation engine
// ABOUTME: Analyzer, seven recommendation strategies, ranking and engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Liftcoach Intelligence
//!
//! Turns a user's strength-training history into a [`TrainingAnalysis`] and a
//! short, ranked list of [`WorkoutRecommendation`]s. Everything here is pure:
//! the same inputs and `now` always produce the same output.

/// Derived training analysis types
pub mod analysis;

/// Reduction of a raw exercise log into a training analysis
pub mod analyzer;

/// Coaching thresholds, ratios and confidence levels
pub mod coaching_constants;

/// Engine configuration with environment overrides
pub mod config;

/// Recommendation output types
pub mod recommendation;

/// Engine facade and ranker
pub mod recommendation_engine;

/// Rule-based recommendation strategies
pub mod strategies;

pub use analysis::{
    FrequencyMetrics, MuscleDistribution, PatternIndicators, ProgressionIndicators,
    ProgressionRate, RecoveryIndicators, TimeOfDay, TrainingAnalysis, VarietyIndicators,
    VolumeMetrics, VolumeTrend,
};
pub use analyzer::TrainingAnalyzer;
pub use config::IntelligenceConfig;
pub use recommendation::{
    AdjustDetails, AdjustmentDirection, AdjustmentMetric, ExploreDetails, Intensity,
    RecommendationAction, RecommendationPriority, RecommendationType, RestDetails,
    WorkoutDetails, WorkoutRecommendation,
};
pub use recommendation_engine::{
    rank_recommendations, RecommendationRequest, WorkoutRecommendationEngine,
};
pub use strategies::{default_strategies, RecommendationStrategy, StrategyContext};
