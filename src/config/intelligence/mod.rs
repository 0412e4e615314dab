// ABOUTME: Intelligence module configuration for scoring, tagging, matching and planning
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `nutrition` - Health score ranges, dietary tag thresholds, meal names
//! - `matching` - Ingredient containment policy and label detection cap
//!
//! Defaults reproduce the documented engine behavior. A handful of values can be
//! overridden from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `RECIPE_SUGGESTER_MATCH_POLICY` | `matching.policy` (`strict` or `loose`) |
//! | `RECIPE_SUGGESTER_MAX_DETECTED` | `matching.max_detected_ingredients` |
//! | `RECIPE_SUGGESTER_NAME_HEURISTICS` | `tagging.name_heuristics_enabled` |
//! | `RECIPE_SUGGESTER_CALORIE_MIN` | `scoring.calorie_range.min` |
//! | `RECIPE_SUGGESTER_CALORIE_MAX` | `scoring.calorie_range.max` |

pub mod error;
pub mod matching;
pub mod nutrition;

pub use error::ConfigError;
pub use matching::MatchingConfig;
pub use nutrition::{HealthRange, MacroPlannerConfig, ScoringConfig, TaggingConfig};

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Health score ranges and deductions
    pub scoring: ScoringConfig,
    /// Dietary tag thresholds
    pub tagging: TaggingConfig,
    /// Recipe matching policy
    pub matching: MatchingConfig,
    /// Generated meal settings
    pub planner: MacroPlannerConfig,
}

impl EngineConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` reported by a section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.tagging.validate()?;
        self.matching.validate()?;
        self.planner.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("RECIPE_SUGGESTER_MATCH_POLICY", &mut self.matching.policy)?;
        Self::apply_env_var(
            "RECIPE_SUGGESTER_MAX_DETECTED",
            &mut self.matching.max_detected_ingredients,
        )?;
        Self::apply_env_var(
            "RECIPE_SUGGESTER_NAME_HEURISTICS",
            &mut self.tagging.name_heuristics_enabled,
        )?;
        Self::apply_env_var(
            "RECIPE_SUGGESTER_CALORIE_MIN",
            &mut self.scoring.calorie_range.min,
        )?;
        Self::apply_env_var(
            "RECIPE_SUGGESTER_CALORIE_MAX",
            &mut self.scoring.calorie_range.max,
        )?;
        Ok(self)
    }
}
