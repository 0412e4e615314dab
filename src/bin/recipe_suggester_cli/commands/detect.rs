// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: `detect` command - ingredients from image labels, then matching recipes
// ABOUTME: Prints the detected ingredients together with the recommendations

use std::path::Path;

use recipe_suggester::{errors::AppResult, logging::AppLogger, Catalog, RecommendationEngine};

use crate::helpers::display::print_json;

pub fn run(engine: &RecommendationEngine, catalog_dir: &Path, labels: &[String]) -> AppResult<()> {
    let catalog = Catalog::load_from_dir(catalog_dir)?;
    AppLogger::log_catalog_loaded(
        &catalog_dir.display().to_string(),
        catalog.len(),
        catalog.ingredients().len(),
    );

    let result = engine.recommend_by_labels(labels, &catalog);
    AppLogger::log_recommendation("labels", labels.len(), result.recommendations.len());

    print_json(&result)
}
