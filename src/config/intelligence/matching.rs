// ABOUTME: Matching configuration for catalog lookups and label detection
// ABOUTME: Selects the ingredient containment policy and the detected-ingredient cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::intelligence::label_detection::DEFAULT_DETECTION_LIMIT;
use crate::intelligence::matcher::MatchPolicy;

/// Ingredient matching configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Containment rule applied by the recipe matcher
    pub policy: MatchPolicy,
    /// Maximum number of ingredients kept from image labels
    pub max_detected_ingredients: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::Strict,
            max_detected_ingredients: DEFAULT_DETECTION_LIMIT,
        }
    }
}

impl MatchingConfig {
    /// Validate the detection cap
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the cap is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_detected_ingredients == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_detected_ingredients must be at least 1",
            ));
        }
        Ok(())
    }
}
