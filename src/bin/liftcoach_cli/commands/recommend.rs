// ABOUTME: Recommend command for liftcoach-cli
// ABOUTME: Applies per-run ranking overrides and prints the ranked recommendation list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use chrono::{DateTime, Utc};
use liftcoach::errors::AppResult;
use liftcoach::input::load_snapshot;
use liftcoach::intelligence::{
    IntelligenceConfig, RecommendationRequest, WorkoutRecommendationEngine,
};
use tracing::info;

use crate::helpers::display::print_json;

/// Print ranked recommendations for the snapshot at `input`
pub fn run(
    input: &Path,
    now: DateTime<Utc>,
    min_confidence: Option<u8>,
    limit: Option<usize>,
) -> AppResult<()> {
    info!("Generating recommendations for {}", input.display());

    let config = build_config(min_confidence, limit)?;
    let snapshot = load_snapshot(input)?;

    let engine = WorkoutRecommendationEngine::with_config(config.recommendation_engine);
    let request = RecommendationRequest::from_snapshot(&snapshot, now);
    let recommendations = engine.generate_recommendations(&request);

    print_json(&recommendations)
}

/// Global configuration with command-line overrides applied and re-validated
fn build_config(min_confidence: Option<u8>, limit: Option<usize>) -> AppResult<IntelligenceConfig> {
    let mut config = IntelligenceConfig::global().clone();
    let limits = &mut config.recommendation_engine.limits;
    if let Some(min_confidence) = min_confidence {
        limits.min_confidence = min_confidence;
    }
    if let Some(limit) = limit {
        limits.max_recommendations = limit;
    }
    config.validate()?;
    Ok(config)
}
