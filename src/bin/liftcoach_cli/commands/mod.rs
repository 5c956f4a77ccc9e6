// ABOUTME: Re-exports command modules for liftcoach-cli
// ABOUTME: Provides access to the analyze and recommend commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod recommend;
