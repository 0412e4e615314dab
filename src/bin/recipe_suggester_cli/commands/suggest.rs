// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: `suggest` command - recipes matching the supplied ingredients
// ABOUTME: Loads the catalog, applies an optional policy override and prints recommendations

use std::path::Path;

use recipe_suggester::{
    errors::AppResult, intelligence::RecipeMatcher, logging::AppLogger, Catalog, MatchPolicy,
    RecommendationEngine,
};

use crate::helpers::display::print_json;

pub fn run(
    engine: &RecommendationEngine,
    catalog_dir: &Path,
    ingredients: &[String],
    policy: Option<MatchPolicy>,
) -> AppResult<()> {
    let catalog = Catalog::load_from_dir(catalog_dir)?;
    AppLogger::log_catalog_loaded(
        &catalog_dir.display().to_string(),
        catalog.len(),
        catalog.ingredients().len(),
    );

    let engine = match policy {
        Some(policy) => engine.clone().with_matcher(RecipeMatcher::new(policy)),
        None => engine.clone(),
    };
    let recommendations = engine.recommend_by_ingredients(ingredients, catalog.recipes());
    AppLogger::log_recommendation("ingredients", ingredients.len(), recommendations.len());

    print_json(&recommendations)
}
