// ABOUTME: Recipe matching and nutrition intelligence for the recipe suggester
// ABOUTME: Groups normalizer, matcher, scorer, planner, label detection and the recommendation facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure, synchronous components over immutable inputs. Everything here can be
//! shared across threads by reference.

/// Ingredient label detection against the catalog vocabulary
pub mod label_detection;
/// Per-macro intensity bands
pub mod macro_levels;
/// Meal generation from calorie and macro targets
pub mod macro_planner;
/// Ingredient-set recipe matching
pub mod matcher;
/// Ingredient token normalization
pub mod normalizer;
/// Health score and dietary tags
pub mod nutrition_scorer;
/// Recipe and nutrition data models
pub mod recipes;
/// Recommendation facade
pub mod recommendation_engine;

pub use label_detection::{detect_ingredients, DEFAULT_DETECTION_LIMIT};
pub use macro_levels::{assess_macro_level, MacroAssessment, MacroKind, MacroLevel};
pub use macro_planner::{GeneratedMeal, MacroPlanner};
pub use matcher::{MatchPolicy, ParseMatchPolicyError, RecipeMatcher};
pub use normalizer::{normalize, normalized_set, IngredientToken};
pub use nutrition_scorer::{
    name_heuristic_tags, DietaryTag, DietaryTagSet, HealthLabel, HealthScore, NutritionScorer,
    TagContext, UnknownDietaryTag,
};
pub use recipes::{Difficulty, MacroPercentages, MacroTargets, Nutrition, Recipe};
pub use recommendation_engine::{
    LabelRecommendation, MealRecommendation, RecipeRecommendation, RecommendationEngine,
};
