// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: `score` command - health score and dietary tags for ad-hoc nutrition figures
// ABOUTME: Validates the figures, then prints score, label, tags and macro percentages

use recipe_suggester::{
    errors::AppResult,
    intelligence::{DietaryTagSet, HealthLabel, HealthScore, MacroPercentages, TagContext},
    logging::AppLogger,
    Nutrition, RecommendationEngine,
};
use serde::Serialize;

use crate::helpers::display::print_json;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreReport<'a> {
    name: Option<&'a str>,
    nutrition: Nutrition,
    health_score: HealthScore,
    health_label: HealthLabel,
    dietary_tags: DietaryTagSet,
    macro_percentages: Option<MacroPercentages>,
}

pub fn run(
    engine: &RecommendationEngine,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    name: Option<&str>,
) -> AppResult<()> {
    let nutrition = match Nutrition::new(calories, protein, carbs, fat) {
        Ok(nutrition) => nutrition,
        Err(e) => {
            AppLogger::log_validation_failure("score", &e);
            return Err(e.into());
        }
    };

    let scorer = engine.scorer();
    let health_score = scorer.score(&nutrition);
    let report = ScoreReport {
        name,
        nutrition,
        health_score,
        health_label: health_score.label(),
        dietary_tags: scorer.tags(&nutrition, TagContext { name }),
        macro_percentages: nutrition.macro_percentages(),
    };

    print_json(&report)
}
