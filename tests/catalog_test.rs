// ABOUTME: Integration tests for catalog loading from JSON files on disk
// ABOUTME: Uses temporary directories to cover success, missing files and malformed documents
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::Path;

use anyhow::Result;
use recipe_suggester::errors::ErrorResponse;
use recipe_suggester::{Catalog, ErrorCode, RecommendationEngine};
use tempfile::TempDir;

const DISHES_JSON: &str = r#"[
    {"name": "Omelette", "ingredients": ["Egg", "Milk"], "instructions": "Whisk and fry.",
     "nutrition": {"calories": 250, "protein": 18, "carbs": 3, "fat": 18},
     "prepTime": 10, "difficulty": "easy", "dietary": ["vegetarian"]},
    {"name": "Tomato salad", "ingredients": ["Tomato", "Olive oil"],
     "nutrition": {"calories": 150, "protein": 2, "carbs": 8, "fat": 12}}
]"#;

fn write_catalog(dir: &Path, ingredients: &str, dishes: &str) -> Result<()> {
    fs::write(dir.join("ingredients.json"), ingredients)?;
    fs::write(dir.join("dishes.json"), dishes)?;
    Ok(())
}

#[test]
fn test_load_from_dir() -> Result<()> {
    common::init_test_logging();
    let temp_dir = TempDir::new()?;
    write_catalog(temp_dir.path(), r#"["Egg", "Milk", "Tomato"]"#, DISHES_JSON)?;

    let catalog = Catalog::load_from_dir(temp_dir.path())?;
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.vocabulary(), vec!["Egg", "Milk", "Tomato"]);
    assert_eq!(catalog.recipes()[0].prep_time_mins, Some(10));
    Ok(())
}

#[test]
fn test_missing_file_is_storage_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("ingredients.json"), "[]")?;

    let err = Catalog::load_from_dir(temp_dir.path()).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(err.details["path"].as_str().unwrap().ends_with("dishes.json"));
    Ok(())
}

#[test]
fn test_malformed_dishes_is_serialization_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_catalog(temp_dir.path(), "[]", r#"[{"name": "No nutrition"}]"#)?;

    let err = Catalog::load_from_dir(temp_dir.path()).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);

    let envelope = serde_json::to_value(ErrorResponse::from(err))?;
    assert_eq!(envelope["error"]["code"], "SERIALIZATION_ERROR");
    Ok(())
}

#[test]
fn test_loaded_catalog_feeds_engine() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_catalog(temp_dir.path(), "[]", DISHES_JSON)?;
    let catalog = Catalog::load_from_dir(temp_dir.path())?;

    let result = RecommendationEngine::default().recommend_by_labels(&["olive oil", "TOMATO"], &catalog);
    assert_eq!(result.recommendations.len(), 1);
    assert_eq!(result.recommendations[0].recipe.name, "Tomato salad");
    Ok(())
}

#[test]
fn test_bundled_demo_catalog_loads() -> Result<()> {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let catalog = Catalog::load_from_dir(data_dir)?;

    assert!(!catalog.is_empty());
    assert!(!catalog.vocabulary().is_empty());
    Ok(())
}
