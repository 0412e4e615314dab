// ABOUTME: Integration tests for the macro planner
// ABOUTME: Covers gram conversion, rounding, validation order and seeded name selection
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs)]

mod common;

use recipe_suggester::config::intelligence::MacroPlannerConfig;
use recipe_suggester::intelligence::{GeneratedMeal, MacroPlanner};
use recipe_suggester::{AppError, ErrorCode, MacroTargets, ValidationError};

fn planner() -> MacroPlanner {
    MacroPlanner::new(&MacroPlannerConfig::default())
}

// ============================================================================
// Gram Conversion Tests
// ============================================================================

#[test]
fn test_daily_split_in_grams() {
    common::init_test_logging();
    let meal = planner()
        .plan(&MacroTargets::new(2000.0, 30.0, 30.0, 40.0), &mut common::seeded_rng())
        .unwrap();

    assert_eq!(meal.proteins, 150);
    assert_eq!(meal.carbs, 200);
    assert_eq!(meal.fats, 67);
    assert!((meal.calories - 2000.0).abs() < f64::EPSILON);
}

#[test]
fn test_half_gram_rounds_up() {
    let meal = planner()
        .plan(&MacroTargets::new(10.0, 0.0, 0.0, 100.0), &mut common::seeded_rng())
        .unwrap();

    assert_eq!(meal.carbs, 3);
    assert_eq!(meal.proteins, 0);
    assert_eq!(meal.fats, 0);
}

#[test]
fn test_meal_nutrition_view() {
    let meal = planner()
        .plan(&MacroTargets::new(600.0, 30.0, 30.0, 40.0), &mut common::seeded_rng())
        .unwrap();
    let nutrition = meal.nutrition();

    assert!((nutrition.protein - f64::from(meal.proteins)).abs() < f64::EPSILON);
    assert!((nutrition.fat - f64::from(meal.fats)).abs() < f64::EPSILON);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_percentages_must_sum_to_100() {
    let err = planner()
        .plan(&MacroTargets::new(2000.0, 30.0, 30.0, 39.0), &mut common::seeded_rng())
        .unwrap_err();

    assert_eq!(err, ValidationError::PercentSum { total: 99.0 });
    assert_eq!(err.to_string(), "macro percentages must sum to 100, got 99");
}

#[test]
fn test_short_split_reports_total() {
    let err = MacroPlanner::validate(&MacroTargets::new(2000.0, 30.0, 30.0, 30.0)).unwrap_err();

    assert_eq!(err, ValidationError::PercentSum { total: 90.0 });
}

#[test]
fn test_sum_reported_before_bad_calories() {
    let err = MacroPlanner::validate(&MacroTargets::new(-1.0, 50.0, 50.0, 50.0)).unwrap_err();

    assert!(matches!(err, ValidationError::PercentSum { .. }));
}

#[test]
fn test_non_positive_calories_rejected() {
    for calories in [0.0, -100.0, f64::NAN, f64::INFINITY] {
        let err = MacroPlanner::validate(&MacroTargets::new(calories, 30.0, 30.0, 40.0)).unwrap_err();
        assert_eq!(err, ValidationError::Range { field: "calories" });
    }
}

#[test]
fn test_out_of_range_percent_named() {
    let err = MacroPlanner::validate(&MacroTargets::new(500.0, 120.0, -20.0, 0.0)).unwrap_err();
    assert_eq!(err, ValidationError::Range { field: "proteinPercent" });

    let err = MacroPlanner::validate(&MacroTargets::new(500.0, 40.0, 110.0, -50.0)).unwrap_err();
    assert_eq!(err, ValidationError::Range { field: "fatPercent" });
}

#[test]
fn test_calories_beyond_gram_range_rejected() {
    let err = planner()
        .plan(&MacroTargets::new(1.0e11, 30.0, 30.0, 40.0), &mut common::seeded_rng())
        .unwrap_err();

    assert_eq!(err, ValidationError::Range { field: "calories" });
}

#[test]
fn test_large_calories_keep_exact_grams() {
    let meal = planner()
        .plan(&MacroTargets::new(1.0e10, 30.0, 30.0, 40.0), &mut common::seeded_rng())
        .unwrap();

    assert_eq!(meal.proteins, 750_000_000);
    assert_eq!(meal.carbs, 1_000_000_000);
    assert_eq!(meal.fats, 333_333_333);
}

#[test]
fn test_validation_error_maps_to_app_error() {
    let err = MacroPlanner::validate(&MacroTargets::new(500.0, 10.0, 10.0, 10.0)).unwrap_err();
    let app_error = AppError::from(err);

    assert_eq!(app_error.code, ErrorCode::InvalidInput);
    assert_eq!(app_error.http_status(), 400);
}

// ============================================================================
// Meal Name Tests
// ============================================================================

#[test]
fn test_seeded_name_is_reproducible() {
    let targets = MacroTargets::new(700.0, 25.0, 25.0, 50.0);
    let first = planner().plan(&targets, &mut common::seeded_rng()).unwrap();
    let second = planner().plan(&targets, &mut common::seeded_rng()).unwrap();

    assert_eq!(first.name, second.name);
    assert!(MacroPlannerConfig::default().meal_names.contains(&first.name));
}

#[test]
fn test_single_candidate_always_chosen() {
    let config = MacroPlannerConfig {
        meal_names: vec!["Chef's special".to_owned()],
    };
    let meal = MacroPlanner::new(&config)
        .plan(&MacroTargets::new(700.0, 25.0, 25.0, 50.0), &mut rand::thread_rng())
        .unwrap();

    assert_eq!(meal.name, "Chef's special");
}

#[test]
fn test_generated_meal_accepts_meal_field_alias() {
    let meal: GeneratedMeal = serde_json::from_str(
        r#"{"meal": "Tuna pasta salad", "calories": 540, "proteins": 35, "carbs": 60, "fats": 16}"#,
    )
    .unwrap();

    assert_eq!(meal.name, "Tuna pasta salad");
}
