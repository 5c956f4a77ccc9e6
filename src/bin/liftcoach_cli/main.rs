// ABOUTME: Liftcoach CLI - analyze training history and print workout recommendations
// ABOUTME: Reads a JSON training snapshot and writes the analysis or ranked list as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print the derived training analysis
//! liftcoach-cli analyze --input history.json
//!
//! # Print ranked recommendations as of a fixed instant
//! liftcoach-cli recommend --input history.json --now 2025-06-18T19:00:00Z
//!
//! # Tighten ranking limits for one run
//! liftcoach-cli recommend --input history.json --min-confidence 80 --limit 3
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use liftcoach::logging;
use tracing::info;

use helpers::time::parse_now;

#[derive(Parser)]
#[command(
    name = "liftcoach-cli",
    about = "Liftcoach training analysis CLI",
    long_about = "Analyze a strength-training history and produce ranked workout recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the training analysis derived from a snapshot
    Analyze {
        /// Path to the training snapshot JSON file
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Reference instant (RFC 3339, YYYY-MM-DD or epoch millis; defaults to now)
        #[arg(long, value_parser = parse_now)]
        now: Option<DateTime<Utc>>,
    },

    /// Print ranked workout recommendations for a snapshot
    Recommend {
        /// Path to the training snapshot JSON file
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Reference instant (RFC 3339, YYYY-MM-DD or epoch millis; defaults to now)
        #[arg(long, value_parser = parse_now)]
        now: Option<DateTime<Utc>>,

        /// Minimum confidence a recommendation needs to be returned
        #[arg(long)]
        min_confidence: Option<u8>,

        /// Maximum number of recommendations to return
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_from_env(cli.verbose).context("Failed to initialize logging")?;

    info!("Liftcoach CLI");

    match cli.command {
        Command::Analyze { input, now } => {
            commands::analyze::run(&input, now.unwrap_or_else(Utc::now))?;
        }
        Command::Recommend {
            input,
            now,
            min_confidence,
            limit,
        } => {
            commands::recommend::run(
                &input,
                now.unwrap_or_else(Utc::now),
                min_confidence,
                limit,
            )?;
        }
    }

    Ok(())
}
