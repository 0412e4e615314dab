// ABOUTME: Nutrition configuration for health scoring, dietary tagging and meal planning
// ABOUTME: Holds the balanced-macro ranges, score deductions, tag thresholds and meal names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Scoring Configuration
//!
//! The health score rewards a balanced macro split. A meal is considered balanced
//! when protein supplies 15-35% of its calories, fat 20-35% and carbohydrates 45-65%,
//! and when the meal itself sits between 200 and 800 kcal. Each range that is
//! missed costs a fixed number of points.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Inclusive numeric range used for balance checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl HealthRange {
    /// Create a new inclusive range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check whether a value lies within the range (bounds included)
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn is_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// Health score configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Score before any deduction
    pub base_score: u8,
    /// Balanced share of calories from protein, in percent
    pub protein_range: HealthRange,
    /// Balanced share of calories from fat, in percent
    pub fat_range: HealthRange,
    /// Balanced share of calories from carbohydrates, in percent
    pub carb_range: HealthRange,
    /// Points lost per macro outside its balanced range
    pub macro_deduction: u8,
    /// Reasonable calorie band for a single meal (kcal)
    pub calorie_range: HealthRange,
    /// Points lost when calories fall outside the band
    pub calorie_deduction: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 100,
            protein_range: HealthRange::new(15.0, 35.0),
            fat_range: HealthRange::new(20.0, 35.0),
            carb_range: HealthRange::new(45.0, 65.0),
            macro_deduction: 15,
            calorie_range: HealthRange::new(200.0, 800.0),
            calorie_deduction: 10,
        }
    }
}

impl ScoringConfig {
    /// Validate ranges and deductions
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for unordered ranges, and
    /// `ConfigError::InvalidWeights` when the base score or a deduction exceeds 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            (
                &self.protein_range,
                "protein_range.min must be < protein_range.max",
            ),
            (&self.fat_range, "fat_range.min must be < fat_range.max"),
            (&self.carb_range, "carb_range.min must be < carb_range.max"),
            (
                &self.calorie_range,
                "calorie_range.min must be < calorie_range.max",
            ),
        ];
        for (range, message) in ranges {
            if !range.is_ordered() {
                return Err(ConfigError::InvalidRange(message));
            }
        }

        if self.base_score > 100 {
            return Err(ConfigError::InvalidWeights("base_score must be <= 100"));
        }
        if self.macro_deduction > 100 || self.calorie_deduction > 100 {
            return Err(ConfigError::InvalidWeights(
                "score deductions must be <= 100",
            ));
        }

        Ok(())
    }
}

/// Dietary tag thresholds, in percent of calories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggingConfig {
    /// Fat share above which a low-carb meal is keto
    pub keto_fat_min: f64,
    /// Carb share below which a high-fat meal is keto
    pub keto_carb_max: f64,
    /// Fat share above which a meal is keto-friendly
    pub keto_friendly_fat_min: f64,
    /// Carb share below which a fatty meal is keto-friendly
    pub keto_friendly_carb_max: f64,
    /// Carb share below which a meal is low-carb
    pub low_carb_max: f64,
    /// Protein share above which a meal is high-protein
    pub high_protein_min: f64,
    /// Fat share below which a meal is low-fat
    pub low_fat_max: f64,
    /// Enable the name-based enrichment layer
    pub name_heuristics_enabled: bool,
}

impl Default for TaggingConfig {
    fn default() -> Self {
        Self {
            keto_fat_min: 60.0,
            keto_carb_max: 20.0,
            keto_friendly_fat_min: 45.0,
            keto_friendly_carb_max: 30.0,
            low_carb_max: 20.0,
            high_protein_min: 30.0,
            low_fat_max: 15.0,
            name_heuristics_enabled: true,
        }
    }
}

impl TaggingConfig {
    /// Validate that every threshold is a percentage and keto is stricter than keto-friendly
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a threshold is outside 0-100, or
    /// `ConfigError::InvalidRange` if the keto thresholds are looser than keto-friendly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            self.keto_fat_min,
            self.keto_carb_max,
            self.keto_friendly_fat_min,
            self.keto_friendly_carb_max,
            self.low_carb_max,
            self.high_protein_min,
            self.low_fat_max,
        ];
        if thresholds.iter().any(|t| !(0.0..=100.0).contains(t)) {
            return Err(ConfigError::ValueOutOfRange(
                "tag thresholds must be between 0 and 100 percent",
            ));
        }

        if self.keto_fat_min < self.keto_friendly_fat_min
            || self.keto_carb_max > self.keto_friendly_carb_max
        {
            return Err(ConfigError::InvalidRange(
                "keto thresholds must be stricter than keto-friendly thresholds",
            ));
        }

        Ok(())
    }
}

/// Macro planner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroPlannerConfig {
    /// Display names a generated meal may receive
    pub meal_names: Vec<String>,
}

impl Default for MacroPlannerConfig {
    fn default() -> Self {
        Self {
            meal_names: [
                "Grilled chicken rice bowl",
                "Salmon with quinoa and greens",
                "Tofu vegetable stir-fry",
                "Tuna pasta salad",
                "Turkey and avocado wrap",
                "Beef and broccoli plate",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        }
    }
}

impl MacroPlannerConfig {
    /// Validate that at least one usable meal name exists
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` when no non-blank meal name is configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.meal_names.iter().all(|name| name.trim().is_empty()) {
            return Err(ConfigError::MissingField("planner.meal_names"));
        }
        Ok(())
    }
}
