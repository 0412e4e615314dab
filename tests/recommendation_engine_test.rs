// ABOUTME: Integration tests for the recommendation facade
// ABOUTME: Exercises the ingredient, macro and label flows end to end over a fixture catalog
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs)]

mod common;

use recipe_suggester::config::intelligence::EngineConfig;
use recipe_suggester::intelligence::{
    DietaryTag, HealthLabel, MacroKind, MacroLevel, MatchPolicy, RecipeMatcher,
};
use recipe_suggester::{MacroTargets, RecommendationEngine, ValidationError};

// ============================================================================
// Ingredient Flow Tests
// ============================================================================

#[test]
fn test_declared_tags_are_kept() {
    common::init_test_logging();
    let catalog = common::fixture_recipes();
    let engine = RecommendationEngine::default();

    let results = engine.recommend_by_ingredients(&["Egg", "milk", "BUTTER"], &catalog);
    assert_eq!(results.len(), 1);

    let omelette = &results[0];
    assert_eq!(omelette.recipe.name, "Omelette");
    assert_eq!(omelette.health_score.value(), 70);
    assert_eq!(omelette.health_label, HealthLabel::Good);
    assert_eq!(
        omelette.dietary_tags.iter().copied().collect::<Vec<_>>(),
        vec![DietaryTag::Vegetarian]
    );
}

#[test]
fn test_tags_inferred_without_declared_tags() {
    let catalog = common::fixture_recipes();
    let engine = RecommendationEngine::default();

    let results = engine.recommend_by_ingredients(&["bacon", "egg"], &catalog);
    assert_eq!(results.len(), 1);

    let plate = &results[0];
    assert_eq!(plate.health_score.value(), 55);
    assert!(plate.dietary_tags.contains(DietaryTag::Keto));
    assert!(plate.dietary_tags.contains(DietaryTag::LowCarb));
}

#[test]
fn test_recommendations_follow_catalog_order() {
    let catalog = common::fixture_recipes();
    let engine = RecommendationEngine::default().with_matcher(RecipeMatcher::new(MatchPolicy::Loose));

    let names: Vec<_> = engine
        .recommend_by_ingredients(&["egg", "rice"], &catalog)
        .into_iter()
        .map(|rec| rec.recipe.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Omelette", "Pancakes", "Tofu rice bowl", "Bacon and eggs"]
    );
}

#[test]
fn test_recommendation_json_shape() {
    let catalog = common::fixture_recipes();
    let results = RecommendationEngine::default().recommend_by_ingredients(&["bacon", "egg"], &catalog);

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["recipe"]["name"], "Bacon and eggs");
    assert_eq!(json[0]["healthScore"], 55);
    assert_eq!(json[0]["healthLabel"], "Fair");
    assert_eq!(json[0]["dietaryTags"], serde_json::json!(["keto", "low-carb"]));
}

// ============================================================================
// Macro Flow Tests
// ============================================================================

#[test]
fn test_macro_flow_scores_generated_meal() {
    let engine = RecommendationEngine::default();

    let recommendation = engine
        .recommend_by_macros(&MacroTargets::new(600.0, 25.0, 25.0, 50.0), &mut common::seeded_rng())
        .unwrap();

    assert_eq!(recommendation.meal.proteins, 38);
    assert_eq!(recommendation.meal.carbs, 75);
    assert_eq!(recommendation.meal.fats, 17);
    assert_eq!(recommendation.health_score.value(), 100);
    assert_eq!(recommendation.macro_levels.len(), 3);
    assert!(recommendation
        .macro_levels
        .iter()
        .all(|assessment| assessment.level != MacroLevel::High));
}

#[test]
fn test_low_carb_high_protein_split_tagged() {
    let recommendation = RecommendationEngine::default()
        .recommend_by_macros(&MacroTargets::new(600.0, 45.0, 45.0, 10.0), &mut common::seeded_rng())
        .unwrap();

    assert!(recommendation.dietary_tags.contains(DietaryTag::LowCarb));
    assert!(recommendation.dietary_tags.contains(DietaryTag::HighProtein));
}

#[test]
fn test_macro_flow_rejects_overflowing_calories() {
    let err = RecommendationEngine::default()
        .recommend_by_macros(&MacroTargets::new(1.0e11, 30.0, 30.0, 40.0), &mut common::seeded_rng())
        .unwrap_err();

    assert_eq!(err, ValidationError::Range { field: "calories" });
}

#[test]
fn test_macro_flow_rejects_bad_split() {
    let err = RecommendationEngine::default()
        .recommend_by_macros(&MacroTargets::new(600.0, 50.0, 50.0, 50.0), &mut common::seeded_rng())
        .unwrap_err();

    assert_eq!(err, ValidationError::PercentSum { total: 150.0 });
}

#[test]
fn test_macro_flow_fat_level() {
    let recommendation = RecommendationEngine::default()
        .recommend_by_macros(&MacroTargets::new(900.0, 15.0, 80.0, 5.0), &mut common::seeded_rng())
        .unwrap();

    let fat = recommendation
        .macro_levels
        .iter()
        .find(|assessment| assessment.kind == MacroKind::Fat)
        .unwrap();
    assert_eq!(fat.status_text(), "High Fat");
}

// ============================================================================
// Label Flow Tests
// ============================================================================

#[test]
fn test_labels_detect_then_match() {
    let catalog = common::fixture_catalog();
    let engine = RecommendationEngine::default();

    let result = engine.recommend_by_labels(&["Food", "Bacon", "kitchen", " EGG", "Tomato"], &catalog);

    let detected: Vec<_> = result.detected.iter().map(|token| token.as_str()).collect();
    assert_eq!(detected, vec!["egg", "tomato", "bacon"]);
    assert_eq!(result.recommendations.len(), 1);
    assert_eq!(result.recommendations[0].recipe.name, "Bacon and eggs");
}

#[test]
fn test_labels_without_known_ingredient() {
    let catalog = common::fixture_catalog();

    let result = RecommendationEngine::default().recommend_by_labels(&["Table", "Window"], &catalog);
    assert!(result.detected.is_empty());
    assert!(result.recommendations.is_empty());
}

#[test]
fn test_detection_limit_from_config() {
    let catalog = common::fixture_catalog();
    let mut config = EngineConfig::default();
    config.matching.max_detected_ingredients = 2;
    let engine = RecommendationEngine::new(&config);

    let result = engine.recommend_by_labels(&["bacon", "tomato", "egg", "milk"], &catalog);
    let detected: Vec<_> = result.detected.iter().map(|token| token.as_str()).collect();
    assert_eq!(detected, vec!["egg", "milk"]);
}
