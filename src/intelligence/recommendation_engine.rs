// ABOUTME: Recommendation facade composing matcher, scorer, planner and label detector
// ABOUTME: Produces scored and tagged recipe or meal recommendations for the three user flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine
//!
//! Entry point for callers. Each flow returns fully annotated results:
//!
//! - **By ingredients**: match the catalog, then score and tag every match.
//! - **By macros**: plan a meal from targets, then score and tag it.
//! - **By labels**: detect ingredients from image labels, then run the
//!   ingredient flow with what was detected.
//!
//! Recipes that declare recognizable dietary tags keep them. Recipes without
//! any get tags inferred from their macros and name.

use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use super::label_detection::detect_ingredients;
use super::macro_levels::{assess, MacroAssessment, MacroKind};
use super::macro_planner::{GeneratedMeal, MacroPlanner};
use super::matcher::RecipeMatcher;
use super::normalizer::{normalized_set, IngredientToken};
use super::nutrition_scorer::{
    DietaryTag, DietaryTagSet, HealthLabel, HealthScore, NutritionScorer, TagContext,
};
use super::recipes::{MacroTargets, Recipe};
use crate::catalog::Catalog;
use crate::config::intelligence::EngineConfig;
use crate::constants::energy::{CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};
use crate::errors::ValidationError;

/// A matched catalog recipe with its score and tags
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecommendation<'a> {
    /// Matched recipe, borrowed from the catalog
    pub recipe: &'a Recipe,
    /// Health score of the recipe's nutrition
    pub health_score: HealthScore,
    /// Band of the health score
    pub health_label: HealthLabel,
    /// Declared or inferred dietary tags
    pub dietary_tags: DietaryTagSet,
}

/// A generated meal with its score, tags and per-macro levels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRecommendation {
    /// Planned meal
    pub meal: GeneratedMeal,
    /// Health score of the meal's nutrition
    pub health_score: HealthScore,
    /// Band of the health score
    pub health_label: HealthLabel,
    /// Inferred dietary tags
    pub dietary_tags: DietaryTagSet,
    /// Protein, carbohydrate and fat levels relative to the meal's calories
    pub macro_levels: Vec<MacroAssessment>,
}

/// Outcome of the label flow
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRecommendation<'a> {
    /// Ingredients recognized among the labels
    pub detected: Vec<IngredientToken>,
    /// Recommendations for the detected ingredients
    pub recommendations: Vec<RecipeRecommendation<'a>>,
}

/// Facade over the matching, scoring and planning components
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    matcher: RecipeMatcher,
    scorer: NutritionScorer,
    planner: MacroPlanner,
    detection_limit: usize,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl RecommendationEngine {
    /// Create an engine from explicit configuration
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            matcher: RecipeMatcher::from_config(&config.matching),
            scorer: NutritionScorer::from_config(config),
            planner: MacroPlanner::new(&config.planner),
            detection_limit: config.matching.max_detected_ingredients,
        }
    }

    /// Same engine with a different matcher
    #[must_use]
    pub const fn with_matcher(mut self, matcher: RecipeMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Scorer used for recommendations
    #[must_use]
    pub const fn scorer(&self) -> &NutritionScorer {
        &self.scorer
    }

    /// Recommend catalog recipes cookable with the given ingredients
    pub fn recommend_by_ingredients<'a, S: AsRef<str>>(
        &self,
        user_tokens: &[S],
        catalog: &'a [Recipe],
    ) -> Vec<RecipeRecommendation<'a>> {
        let available = normalized_set(user_tokens);
        self.recommend_for_tokens(&available, catalog)
    }

    /// Plan, score and tag a meal for the given macro targets
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the targets are rejected by the planner
    pub fn recommend_by_macros<R: Rng + ?Sized>(
        &self,
        targets: &MacroTargets,
        rng: &mut R,
    ) -> Result<MealRecommendation, ValidationError> {
        let meal = self.planner.plan(targets, rng)?;
        let nutrition = meal.nutrition();
        let health_score = self.scorer.score(&nutrition);
        let dietary_tags = self.scorer.tags(&nutrition, TagContext::named(&meal.name));
        let macro_levels = macro_levels(&meal);

        debug!(
            meal.name = %meal.name,
            health.score = health_score.value(),
            tags.count = dietary_tags.len(),
            "Recommended meal for macro targets"
        );

        Ok(MealRecommendation {
            health_label: health_score.label(),
            meal,
            health_score,
            dietary_tags,
            macro_levels,
        })
    }

    /// Detect ingredients from labels, then recommend recipes for them
    ///
    /// Unlike the ingredient flow, detecting nothing yields no recommendations
    /// rather than the whole catalog.
    pub fn recommend_by_labels<'a, L: AsRef<str>>(
        &self,
        labels: &[L],
        catalog: &'a Catalog,
    ) -> LabelRecommendation<'a> {
        let vocabulary = catalog.vocabulary();
        let detected = detect_ingredients(labels, &vocabulary, self.detection_limit);
        if detected.is_empty() {
            debug!(labels.count = labels.len(), "No known ingredient among labels");
            return LabelRecommendation {
                detected,
                recommendations: Vec::new(),
            };
        }

        let available: HashSet<IngredientToken> = detected.iter().cloned().collect();
        let recommendations = self.recommend_for_tokens(&available, catalog.recipes());

        LabelRecommendation {
            detected,
            recommendations,
        }
    }

    fn recommend_for_tokens<'a>(
        &self,
        available: &HashSet<IngredientToken>,
        catalog: &'a [Recipe],
    ) -> Vec<RecipeRecommendation<'a>> {
        self.matcher
            .find_matches_normalized(available, catalog)
            .into_iter()
            .map(|recipe| self.annotate(recipe))
            .collect()
    }

    /// Score and tag a single catalog recipe
    #[must_use]
    pub fn annotate<'a>(&self, recipe: &'a Recipe) -> RecipeRecommendation<'a> {
        let health_score = self.scorer.score(&recipe.nutrition);
        let declared = declared_tags(recipe);
        let dietary_tags = if declared.is_empty() {
            self.scorer
                .tags(&recipe.nutrition, TagContext::named(&recipe.name))
        } else {
            declared
        };

        RecipeRecommendation {
            recipe,
            health_score,
            health_label: health_score.label(),
            dietary_tags,
        }
    }
}

/// Recognizable tags declared by the catalog; unknown ones are logged and skipped
fn declared_tags(recipe: &Recipe) -> DietaryTagSet {
    recipe
        .dietary_tags
        .iter()
        .filter_map(|raw| match raw.parse::<DietaryTag>() {
            Ok(tag) => Some(tag),
            Err(e) => {
                warn!(recipe.name = %recipe.name, "Ignoring declared tag: {e}");
                None
            }
        })
        .collect()
}

/// Level of each macro measured against the grams it would take to supply every calorie
fn macro_levels(meal: &GeneratedMeal) -> Vec<MacroAssessment> {
    let grams = [
        (MacroKind::Protein, meal.proteins, PROTEIN_KCAL_PER_GRAM),
        (MacroKind::Carbs, meal.carbs, CARBS_KCAL_PER_GRAM),
        (MacroKind::Fat, meal.fats, FAT_KCAL_PER_GRAM),
    ];
    grams
        .into_iter()
        .map(|(kind, value, kcal_per_gram)| {
            assess(kind, f64::from(value), meal.calories / kcal_per_gram)
        })
        .collect()
}
