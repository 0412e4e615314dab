// ABOUTME: Converts a calorie goal and macro percentage split into a named meal with gram targets
// ABOUTME: Validates the split, converts calories to grams with Atwater factors, picks a display name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Planner
//!
//! Grams are derived per macro as `calories × percent / 100 / kcal_per_gram`
//! and rounded to the nearest integer, so the calories implied by the grams can
//! drift a few kcal from the target. The display name is picked at random from
//! a configured candidate list; the caller supplies the RNG so runs can be
//! reproduced with a seed.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::recipes::{MacroTargets, Nutrition};
use crate::config::intelligence::MacroPlannerConfig;
use crate::constants::energy::{CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};
use crate::errors::ValidationError;

/// Name used when the configured candidate list has no usable entry
const FALLBACK_MEAL_NAME: &str = "Balanced meal";

/// Meal produced from macro targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMeal {
    /// Display name
    #[serde(alias = "meal")]
    pub name: String,
    /// Calories, copied from the targets
    pub calories: f64,
    /// Protein grams
    pub proteins: u32,
    /// Carbohydrate grams
    pub carbs: u32,
    /// Fat grams
    pub fats: u32,
}

impl GeneratedMeal {
    /// Nutrition view of the meal, used for scoring
    #[must_use]
    pub fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories,
            protein: f64::from(self.proteins),
            carbs: f64::from(self.carbs),
            fat: f64::from(self.fats),
        }
    }
}

/// Plans single meals from calorie and macro targets
#[derive(Debug, Clone, Default)]
pub struct MacroPlanner {
    meal_names: Vec<String>,
}

impl MacroPlanner {
    /// Create a planner with the configured meal name candidates
    #[must_use]
    pub fn new(config: &MacroPlannerConfig) -> Self {
        let meal_names = config
            .meal_names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect();
        Self { meal_names }
    }

    /// Validate targets without planning
    ///
    /// The percentage sum is checked first; no other check runs when it fails.
    /// The sum is compared with exact float equality, so splits such as
    /// `33.3 / 33.4 / 33.3` whose binary sum is `99.99999999999999` are
    /// rejected. Callers holding fractional percentages should round them first.
    ///
    /// Calories are also rejected when any macro's gram amount would not fit in
    /// a `u32`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PercentSum` when the percentages do not sum to
    /// exactly 100, or `ValidationError::Range` naming the first field that is
    /// not finite or out of range
    #[allow(clippy::float_cmp)]
    pub fn validate(targets: &MacroTargets) -> Result<(), ValidationError> {
        let total = targets.percent_total();
        if total != 100.0 {
            return Err(ValidationError::PercentSum { total });
        }

        if !targets.calories.is_finite() || targets.calories <= 0.0 {
            return Err(ValidationError::Range { field: "calories" });
        }

        let percents = [
            ("proteinPercent", targets.protein_percent),
            ("fatPercent", targets.fat_percent),
            ("carbPercent", targets.carb_percent),
        ];
        for (field, value) in percents {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ValidationError::Range { field });
            }
        }

        let shares = [
            (targets.protein_percent, PROTEIN_KCAL_PER_GRAM),
            (targets.carb_percent, CARBS_KCAL_PER_GRAM),
            (targets.fat_percent, FAT_KCAL_PER_GRAM),
        ];
        let fits = shares.into_iter().all(|(percent, kcal_per_gram)| {
            raw_grams(targets.calories, percent, kcal_per_gram) <= f64::from(u32::MAX)
        });
        if !fits {
            return Err(ValidationError::Range { field: "calories" });
        }
        Ok(())
    }

    /// Generate a meal meeting the targets
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found by [`Self::validate`]
    pub fn plan<R: Rng + ?Sized>(
        &self,
        targets: &MacroTargets,
        rng: &mut R,
    ) -> Result<GeneratedMeal, ValidationError> {
        if let Err(e) = Self::validate(targets) {
            debug!(targets.calories = targets.calories, "Rejected macro targets: {e}");
            return Err(e);
        }

        let calories = targets.calories;
        let meal = GeneratedMeal {
            name: self.pick_name(rng),
            calories,
            proteins: grams(calories, targets.protein_percent, PROTEIN_KCAL_PER_GRAM),
            carbs: grams(calories, targets.carb_percent, CARBS_KCAL_PER_GRAM),
            fats: grams(calories, targets.fat_percent, FAT_KCAL_PER_GRAM),
        };

        debug!(
            meal.name = %meal.name,
            meal.calories = meal.calories,
            meal.proteins = meal.proteins,
            meal.carbs = meal.carbs,
            meal.fats = meal.fats,
            "Generated meal from macro targets"
        );
        Ok(meal)
    }

    fn pick_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.meal_names
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| FALLBACK_MEAL_NAME.to_owned())
    }
}

/// Grams supplying a calorie share, rounded half away from zero
fn raw_grams(calories: f64, percent: f64, kcal_per_gram: f64) -> f64 {
    (calories * percent / 100.0 / kcal_per_gram).round()
}

/// Inputs are validated non-negative and within `u32` range
fn grams(calories: f64, percent: f64, kcal_per_gram: f64) -> u32 {
    raw_grams(calories, percent, kcal_per_gram) as u32
}
