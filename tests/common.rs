// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and a small deterministic recipe catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `recipe_suggester`

use std::env;
use std::sync::Once;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use recipe_suggester::{Catalog, Nutrition, Recipe};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic RNG for meal name selection
pub fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

pub fn nutrition(calories: f64, protein: f64, carbs: f64, fat: f64) -> Nutrition {
    Nutrition::new(calories, protein, carbs, fat).unwrap()
}

/// Small catalog covering strict, loose and tagging cases
pub fn fixture_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("Omelette", nutrition(320.0, 20.0, 3.0, 25.0))
            .with_ingredients(["Egg", "Milk", "Butter"])
            .with_dietary_tag("vegetarian"),
        Recipe::new("Pancakes", nutrition(520.0, 15.0, 70.0, 19.0))
            .with_ingredients(["Egg", "Milk", "Flour", "Butter"]),
        Recipe::new("Garden salad", nutrition(180.0, 3.0, 12.0, 14.0))
            .with_ingredients(["Lettuce", "Tomato", "Olive oil"]),
        Recipe::new("Tofu rice bowl", nutrition(480.0, 24.0, 58.0, 16.0))
            .with_ingredients(["Tofu", "Rice", "Soy sauce"]),
        Recipe::new("Bacon and eggs", nutrition(300.0, 5.0, 10.0, 25.0))
            .with_ingredients(["Bacon", "Egg"]),
    ]
}

pub const FIXTURE_INGREDIENTS_JSON: &str = r#"["Egg", "Milk", "Butter", "Flour", "Tomato", "Tofu", "Rice", "Bacon"]"#;

pub fn fixture_catalog() -> Catalog {
    Catalog::new(
        fixture_recipes(),
        serde_json::from_str(FIXTURE_INGREDIENTS_JSON).unwrap(),
    )
    .unwrap()
}
