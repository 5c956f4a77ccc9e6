// ABOUTME: Reference-time parsing for liftcoach-cli arguments
// ABOUTME: Accepts the same date forms as exercise log entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use liftcoach::models::parse_log_date;
use serde_json::Value;

/// Parse `--now`: RFC 3339, `YYYY-MM-DD` or epoch milliseconds
pub fn parse_now(raw: &str) -> Result<DateTime<Utc>, String> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_or_else(|_| Value::String(raw.trim().to_owned()), Value::from);
    parse_log_date(&value).ok_or_else(|| format!("unrecognized date: {raw}"))
}
