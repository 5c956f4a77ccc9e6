// ABOUTME: Configuration module for liftcoach-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (rule thresholds and ranking limits)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
