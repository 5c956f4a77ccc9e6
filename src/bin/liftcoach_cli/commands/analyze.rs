// ABOUTME: Analyze command for liftcoach-cli
// ABOUTME: Loads a snapshot and prints the derived training analysis as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use chrono::{DateTime, Utc};
use liftcoach::errors::AppResult;
use liftcoach::input::load_snapshot;
use liftcoach::intelligence::{RecommendationRequest, WorkoutRecommendationEngine};
use tracing::info;

use crate::helpers::display::print_json;

/// Print the training analysis for the snapshot at `input`
pub fn run(input: &Path, now: DateTime<Utc>) -> AppResult<()> {
    info!("Analyzing {}", input.display());
    let snapshot = load_snapshot(input)?;

    let engine = WorkoutRecommendationEngine::new();
    let request = RecommendationRequest::from_snapshot(&snapshot, now);
    let analysis = engine.analyze(&request);

    print_json(&analysis)
}
