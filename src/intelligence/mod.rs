// ABOUTME: Intelligence module re-exports from the liftcoach-intelligence crate
// ABOUTME: Gives binaries and integration tests one import path for the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Training analysis and rule-based workout recommendations.

// Re-export all public items from liftcoach-intelligence
pub use liftcoach_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::strategies::RecoveryStrategy)
pub use liftcoach_intelligence::{
    analysis, analyzer, coaching_constants, config, recommendation, recommendation_engine,
    strategies,
};
