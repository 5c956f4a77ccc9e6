// ABOUTME: Output formatting helpers for liftcoach-cli
// ABOUTME: Writes results to stdout as pretty-printed JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, Write};

use liftcoach::errors::{AppError, AppResult};
use serde::Serialize;

/// Print a value as pretty JSON followed by a newline
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::serialization("Failed to render output").with_source(e))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")
        .map_err(|e| AppError::internal("Failed to write output").with_source(e))
}
