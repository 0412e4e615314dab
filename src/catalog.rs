// ABOUTME: Recipe catalog and ingredient vocabulary loaded from JSON documents
// ABOUTME: Reads ingredients.json and dishes.json, validates nutrition and derives the vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog
//!
//! The catalog is loaded once and then only read. Two documents make it up:
//!
//! - `ingredients.json`: array of known ingredient names, used as the
//!   vocabulary for label detection
//! - `dishes.json`: array of recipes
//!
//! When the ingredient list is empty the vocabulary is derived from the
//! recipes themselves.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::json;
use tracing::{debug, info};

use crate::constants::catalog_files::{DISHES, INGREDIENTS};
use crate::errors::{AppError, AppResult};
use crate::intelligence::normalizer::normalize;
use crate::intelligence::recipes::Recipe;

/// Immutable recipe catalog with its ingredient vocabulary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    ingredients: Vec<String>,
}

impl Catalog {
    /// Build a catalog from already-parsed parts
    ///
    /// # Errors
    ///
    /// Returns an error naming the first recipe whose nutrition is negative or not finite
    pub fn new(recipes: Vec<Recipe>, ingredients: Vec<String>) -> AppResult<Self> {
        for recipe in &recipes {
            recipe.nutrition.validate().map_err(|e| {
                let mut error = AppError::from(e);
                if let Some(details) = error.details.as_object_mut() {
                    details.insert("recipe".to_owned(), json!(recipe.name));
                }
                error
            })?;
        }
        Ok(Self {
            recipes,
            ingredients,
        })
    }

    /// Parse a catalog from the two JSON documents
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON and a validation error for
    /// recipes with invalid nutrition
    pub fn from_json(ingredients_json: &str, dishes_json: &str) -> AppResult<Self> {
        let ingredients: Vec<String> = serde_json::from_str(ingredients_json)?;
        let recipes: Vec<Recipe> = serde_json::from_str(dishes_json)?;
        Self::new(recipes, ingredients)
    }

    /// Load `ingredients.json` and `dishes.json` from a directory
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when a file cannot be read, plus the errors of [`Self::from_json`]
    pub fn load_from_dir(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref();
        let ingredients_json = read_document(&dir.join(INGREDIENTS))?;
        let dishes_json = read_document(&dir.join(DISHES))?;

        let catalog = Self::from_json(&ingredients_json, &dishes_json)?;
        info!(
            catalog.dir = %dir.display(),
            catalog.recipes = catalog.recipes.len(),
            catalog.ingredients = catalog.ingredients.len(),
            "Loaded recipe catalog"
        );
        Ok(catalog)
    }

    /// Recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Known ingredient names as listed
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when the catalog has no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Ingredient vocabulary for label detection
    ///
    /// Falls back to recipe ingredients (first occurrence, normalized dedupe)
    /// when no ingredient list was supplied.
    #[must_use]
    pub fn vocabulary(&self) -> Vec<&str> {
        if !self.ingredients.is_empty() {
            return self.ingredients.iter().map(String::as_str).collect();
        }

        let mut seen = HashSet::new();
        let derived: Vec<&str> = self
            .recipes
            .iter()
            .flat_map(|recipe| recipe.ingredients.iter())
            .filter(|ingredient| {
                let token = normalize(ingredient);
                !token.is_empty() && seen.insert(token)
            })
            .map(String::as_str)
            .collect();
        debug!(
            vocabulary.size = derived.len(),
            "Derived vocabulary from recipe ingredients"
        );
        derived
    }
}

fn read_document(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("failed to read catalog file {}", path.display()))
            .with_details(json!({ "path": path.display().to_string() }))
            .with_source(e)
    })
}
