// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: `macros` command - generate a scored meal for calorie and macro targets
// ABOUTME: Uses a seeded ChaCha RNG when --seed is given, the thread RNG otherwise

use rand::{thread_rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use recipe_suggester::{
    errors::AppResult, logging::AppLogger, MacroTargets, RecommendationEngine,
};

use crate::helpers::display::print_json;

pub fn run(
    engine: &RecommendationEngine,
    calories: f64,
    protein: f64,
    fat: f64,
    carbs: f64,
    seed: Option<u64>,
) -> AppResult<()> {
    let targets = MacroTargets::new(calories, protein, fat, carbs);
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(thread_rng()),
    };

    let recommendation = match engine.recommend_by_macros(&targets, rng.as_mut()) {
        Ok(recommendation) => recommendation,
        Err(e) => {
            AppLogger::log_validation_failure("macros", &e);
            return Err(e.into());
        }
    };
    AppLogger::log_meal_generated(
        &recommendation.meal.name,
        recommendation.meal.calories,
        recommendation.health_score.value(),
    );

    print_json(&recommendation)
}
