// ABOUTME: Data models for the recipe catalog and macro-based meal planning
// ABOUTME: Defines Recipe, Nutrition, MacroTargets, MacroPercentages and Difficulty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::energy::{CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};
use crate::errors::ValidationError;
use crate::intelligence::normalizer::{normalize, IngredientToken};

/// Cooking difficulty advertised by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Few steps, basic techniques
    Easy,
    /// Some technique required
    Medium,
    /// Involved preparation
    Hard,
}

/// Macronutrient composition of a food, per serving
///
/// Figures come from catalog data and may be approximate: the calories derived
/// from the macros are not required to equal `calories`. Scoring always works on
/// percentages of the stated `calories`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl Nutrition {
    /// Create validated nutrition figures
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Range` naming the first field that is negative or not finite
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Result<Self, ValidationError> {
        let nutrition = Self {
            calories,
            protein,
            carbs,
            fat,
        };
        nutrition.validate()?;
        Ok(nutrition)
    }

    /// Check that every figure is a finite, non-negative number
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Range` naming the first offending field
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::Range { field });
            }
        }
        Ok(())
    }

    /// Calories supplied by protein
    #[must_use]
    pub fn protein_calories(&self) -> f64 {
        self.protein * PROTEIN_KCAL_PER_GRAM
    }

    /// Calories supplied by carbohydrates
    #[must_use]
    pub fn carb_calories(&self) -> f64 {
        self.carbs * CARBS_KCAL_PER_GRAM
    }

    /// Calories supplied by fat
    #[must_use]
    pub fn fat_calories(&self) -> f64 {
        self.fat * FAT_KCAL_PER_GRAM
    }

    /// True when macro percentages cannot be computed (no positive calorie figure)
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.calories.is_finite() && self.calories > 0.0)
    }

    /// Share of calories from each macro, or `None` for degenerate nutrition
    #[must_use]
    pub fn macro_percentages(&self) -> Option<MacroPercentages> {
        if self.is_degenerate() {
            return None;
        }
        Some(MacroPercentages {
            protein_percent: self.protein_calories() / self.calories * 100.0,
            fat_percent: self.fat_calories() / self.calories * 100.0,
            carb_percent: self.carb_calories() / self.calories * 100.0,
        })
    }
}

/// Macronutrient percentage breakdown of a food's stated calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carb_percent: f64,
}

/// Calorie goal and macro split requested for a generated meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    /// Target calories for the meal (kcal)
    pub calories: f64,
    /// Share of calories from protein (0-100)
    pub protein_percent: f64,
    /// Share of calories from fat (0-100)
    pub fat_percent: f64,
    /// Share of calories from carbohydrates (0-100)
    pub carb_percent: f64,
}

impl MacroTargets {
    /// Create targets; validation happens in the macro planner
    #[must_use]
    pub const fn new(calories: f64, protein_percent: f64, fat_percent: f64, carb_percent: f64) -> Self {
        Self {
            calories,
            protein_percent,
            fat_percent,
            carb_percent,
        }
    }

    /// Sum of the three percentages as supplied
    #[must_use]
    pub fn percent_total(&self) -> f64 {
        self.protein_percent + self.fat_percent + self.carb_percent
    }
}

/// A catalog recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe name
    pub name: String,
    /// Ingredients in catalog (pre-normalization) form
    pub ingredients: Vec<String>,
    /// Cooking instructions
    #[serde(default)]
    pub instructions: String,
    /// Nutrition per serving
    pub nutrition: Nutrition,
    /// Preparation time in minutes
    #[serde(default, rename = "prepTime", skip_serializing_if = "Option::is_none")]
    pub prep_time_mins: Option<u16>,
    /// Cooking difficulty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Image reference (URL or path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Dietary tags declared by the catalog
    #[serde(default, alias = "dietary", skip_serializing_if = "Vec::is_empty")]
    pub dietary_tags: Vec<String>,
}

impl Recipe {
    /// Create a new recipe with its nutrition
    #[must_use]
    pub fn new(name: impl Into<String>, nutrition: Nutrition) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            instructions: String::new(),
            nutrition,
            prep_time_mins: None,
            difficulty: None,
            image: None,
            dietary_tags: Vec::new(),
        }
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Add multiple ingredients
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients.extend(ingredients.into_iter().map(Into::into));
        self
    }

    /// Add a declared dietary tag
    #[must_use]
    pub fn with_dietary_tag(mut self, tag: impl Into<String>) -> Self {
        self.dietary_tags.push(tag.into());
        self
    }

    /// Ingredients in normalized token form, catalog order
    pub fn ingredient_tokens(&self) -> impl Iterator<Item = IngredientToken> + '_ {
        self.ingredients.iter().map(|ingredient| normalize(ingredient))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_calories() {
        let nutrition = Nutrition::new(500.0, 40.0, 50.0, 15.0).unwrap();

        assert!((nutrition.protein_calories() - 160.0).abs() < f64::EPSILON);
        assert!((nutrition.carb_calories() - 200.0).abs() < f64::EPSILON);
        assert!((nutrition.fat_calories() - 135.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_field_rejected() {
        let err = Nutrition::new(300.0, 10.0, -1.0, 5.0).unwrap_err();
        assert_eq!(err, ValidationError::Range { field: "carbs" });
    }

    #[test]
    fn test_zero_calories_is_degenerate() {
        let nutrition = Nutrition::new(0.0, 10.0, 10.0, 10.0).unwrap();

        assert!(nutrition.is_degenerate());
        assert!(nutrition.macro_percentages().is_none());
    }

    #[test]
    fn test_recipe_deserializes_catalog_shape() {
        let json = r#"{
            "name": "Tofu Bowl",
            "ingredients": ["Tofu", " Rice "],
            "instructions": "Cook rice, fry tofu.",
            "nutrition": {"calories": 450, "protein": 22, "carbs": 60, "fat": 12},
            "prepTime": 20,
            "difficulty": "easy",
            "dietary": ["vegan"]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.prep_time_mins, Some(20));
        assert_eq!(recipe.difficulty, Some(Difficulty::Easy));
        assert_eq!(recipe.dietary_tags, vec!["vegan".to_owned()]);

        let tokens: Vec<_> = recipe.ingredient_tokens().collect();
        assert_eq!(tokens[1].as_str(), "rice");
    }

    #[test]
    fn test_macro_targets_wire_names() {
        let targets: MacroTargets = serde_json::from_str(
            r#"{"calories": 2000, "proteinPercent": 30, "fatPercent": 30, "carbPercent": 40}"#,
        )
        .unwrap();

        assert!((targets.percent_total() - 100.0).abs() < f64::EPSILON);
    }
}
