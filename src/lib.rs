// ABOUTME: Main library entry point for the liftcoach training recommendation engine
// ABOUTME: Re-exports the workspace crates and adds logging and snapshot file loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Liftcoach
//!
//! Analyzes a user's strength-training history and produces a short, ranked
//! list of coaching recommendations.
//!
//! ## Architecture
//!
//! - **Core**: exercise log models, error types and constants (`liftcoach-core`)
//! - **Intelligence**: analyzer, strategies and ranker (`liftcoach-intelligence`)
//! - **Logging**: `tracing` subscriber setup for the CLI
//! - **Input**: loading training snapshots from disk
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use liftcoach::errors::AppResult;
//! use liftcoach::input::load_snapshot;
//! use liftcoach::intelligence::{RecommendationRequest, WorkoutRecommendationEngine};
//!
//! fn main() -> AppResult<()> {
//!     let snapshot = load_snapshot("history.json")?;
//!     let engine = WorkoutRecommendationEngine::new();
//!     let request = RecommendationRequest::from_snapshot(&snapshot, Utc::now());
//!     for recommendation in engine.generate_recommendations(&request) {
//!         println!("{}: {}", recommendation.priority.rank(), recommendation.title);
//!     }
//!     Ok(())
//! }
//! ```

/// Analysis windows, sentinels and service identifiers
pub use liftcoach_core::constants;

/// Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
pub use liftcoach_core::errors;

/// Exercise log, catalog, personal record and snapshot models
pub use liftcoach_core::models;

/// Training analysis and recommendation engine
pub mod intelligence;

/// Loading training snapshots from files
pub mod input;

/// Structured logging configuration
pub mod logging;
