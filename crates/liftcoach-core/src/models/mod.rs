// ABOUTME: Core data models for the liftcoach training-analysis engine
// ABOUTME: Re-exports exercise log, catalog, personal record and snapshot types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! This module contains the input data structures consumed by the analysis
//! engine. All of them are owned by an external persistence layer; the
//! engine only ever borrows them.
//!
//! ## Core Models
//!
//! - `ExerciseLogEntry`: one logged exercise (date, name, duration, sets)
//! - `ExerciseCatalogEntry`: static reference data mapping an exercise to its primary muscle
//! - `PersonalRecordMap`: best recorded weight per exercise
//! - `UserStats`: aggregate user statistics passed through untouched
//! - `TrainingSnapshot`: the complete JSON document the engine is run against

mod catalog;
mod exercise;
mod records;
mod snapshot;
mod stats;

pub use catalog::ExerciseCatalogEntry;
pub use exercise::{parse_log_date, ExerciseLogEntry};
pub use records::{PersonalRecord, PersonalRecordMap};
pub use snapshot::TrainingSnapshot;
pub use stats::UserStats;
