// ABOUTME: Criterion benchmarks for the training analyzer and recommendation engine
// ABOUTME: Measures analysis and full recommendation generation across history sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for training analysis and recommendation ranking.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_snapshot, reference_now, HistoryBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liftcoach::intelligence::config::intelligence::RecommendationEngineConfig;
use liftcoach::intelligence::{
    RecommendationRequest, TrainingAnalyzer, WorkoutRecommendationEngine,
};

const SIZES: [HistoryBatchSize; 3] = [
    HistoryBatchSize::Small,
    HistoryBatchSize::Medium,
    HistoryBatchSize::Large,
];

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let now = reference_now();

    for size in SIZES {
        let snapshot = generate_snapshot(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("training_analysis", size.count()),
            &snapshot,
            |b, snapshot| {
                b.iter(|| {
                    TrainingAnalyzer::analyze(
                        black_box(&snapshot.exercise_log),
                        black_box(&snapshot.personal_records),
                        black_box(&snapshot.catalog),
                        now,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_generate_recommendations(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendations");
    let engine = WorkoutRecommendationEngine::with_config(RecommendationEngineConfig::default());
    let now = reference_now();

    for size in SIZES {
        let snapshot = generate_snapshot(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("generate_recommendations", size.count()),
            &snapshot,
            |b, snapshot| {
                let request = RecommendationRequest::from_snapshot(snapshot, now);
                b.iter(|| engine.generate_recommendations(black_box(&request)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_generate_recommendations);
criterion_main!(benches);
