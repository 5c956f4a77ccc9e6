// ABOUTME: Re-exports helper modules for liftcoach-cli
// ABOUTME: Provides access to JSON output and timestamp parsing utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod time;
