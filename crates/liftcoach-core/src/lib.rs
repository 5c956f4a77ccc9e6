// ABOUTME: Core types and constants for the liftcoach training-analysis platform
// ABOUTME: Foundation crate with error handling, exercise log models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Liftcoach Core
//!
//! Foundation crate providing shared types and constants for the liftcoach
//! training-analysis engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Analysis windows, sentinels and service identifiers
//! - **models**: Exercise log entries, catalog entries, personal records and the input snapshot

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (exercise log, catalog, personal records, user stats)
pub mod models;
