// ABOUTME: Intelligence module configuration for training analysis and recommendations
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is loaded from defaults, overridden by `LIFTCOACH_*`
//! environment variables, validated, and cached process-wide.
//!
//! # Module Structure
//!
//! - `recommendation` - Rule trigger thresholds and ranking limits
//! - `error` - Validation and parse errors

pub mod error;
pub mod recommendation;

pub use error::ConfigError;
pub use recommendation::{
    RecommendationEngineConfig, RecommendationLimits, RecommendationThresholds,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Largest number of recommendations a caller may ever receive
pub const MAX_RECOMMENDATIONS_CEILING: usize = 10;

/// Lowest confidence floor a deployment may configure
pub const MIN_CONFIDENCE_FLOOR: u8 = 60;

/// Highest confidence a recommendation may carry
pub const MAX_CONFIDENCE: u8 = 100;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the workout recommendation engine
    pub recommendation_engine: RecommendationEngineConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold or limit is outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.recommendation_engine.limits;
        if limits.min_confidence < MIN_CONFIDENCE_FLOOR || limits.min_confidence > MAX_CONFIDENCE {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum confidence must be between 60 and 100",
            ));
        }
        if limits.max_recommendations == 0 || limits.max_recommendations > MAX_RECOMMENDATIONS_CEILING
        {
            return Err(ConfigError::ValueOutOfRange(
                "Maximum recommendations must be between 1 and 10",
            ));
        }

        let thresholds = &self.recommendation_engine.thresholds;
        if thresholds.welcome_back_min_days >= thresholds.welcome_back_max_days {
            return Err(ConfigError::InvalidRange(
                "Welcome-back minimum days must be less than maximum days",
            ));
        }
        if thresholds.low_weekly_frequency >= thresholds.high_weekly_frequency {
            return Err(ConfigError::InvalidRange(
                "Low weekly frequency must be less than high weekly frequency",
            ));
        }
        if thresholds.low_weekly_frequency < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weekly frequency thresholds must be non-negative",
            ));
        }
        if thresholds.pr_attempt_min_days > thresholds.plateau_min_days {
            return Err(ConfigError::InvalidRange(
                "PR attempt days must not exceed plateau days",
            ));
        }
        if thresholds.rest_day_consecutive_days == 0 || thresholds.deload_min_consecutive_days == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Consecutive-day thresholds must be at least 1",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(env::VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let engine = &mut self.recommendation_engine;

        // Ranking limits
        Self::apply_env_var("LIFTCOACH_MIN_CONFIDENCE", &mut engine.limits.min_confidence)?;
        Self::apply_env_var(
            "LIFTCOACH_MAX_RECOMMENDATIONS",
            &mut engine.limits.max_recommendations,
        )?;

        // Recovery
        Self::apply_env_var(
            "LIFTCOACH_REST_DAY_CONSECUTIVE_DAYS",
            &mut engine.thresholds.rest_day_consecutive_days,
        )?;
        Self::apply_env_var(
            "LIFTCOACH_BUSY_WEEK_WORKOUTS",
            &mut engine.thresholds.busy_week_workouts,
        )?;

        // Variety and frequency
        Self::apply_env_var(
            "LIFTCOACH_VARIETY_MIN_UNIQUE",
            &mut engine.thresholds.variety_min_unique_exercises,
        )?;
        Self::apply_env_var(
            "LIFTCOACH_LOW_WEEKLY_FREQUENCY",
            &mut engine.thresholds.low_weekly_frequency,
        )?;
        Self::apply_env_var(
            "LIFTCOACH_HIGH_WEEKLY_FREQUENCY",
            &mut engine.thresholds.high_weekly_frequency,
        )?;

        // Deload
        Self::apply_env_var(
            "LIFTCOACH_DELOAD_MIN_MONTHLY_WORKOUTS",
            &mut engine.thresholds.deload_min_monthly_workouts,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_confidence_below_floor() {
        let mut config = IntelligenceConfig::default();
        config.recommendation_engine.limits.min_confidence = 40;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_rejects_too_many_recommendations() {
        let mut config = IntelligenceConfig::default();
        config.recommendation_engine.limits.max_recommendations = 25;
        assert!(config.validate().is_err());

        config.recommendation_engine.limits.max_recommendations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_frequency_range() {
        let mut config = IntelligenceConfig::default();
        config.recommendation_engine.thresholds.low_weekly_frequency = 7.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }
}
