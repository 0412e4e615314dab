// ABOUTME: Application-wide constants for the recipe suggester
// ABOUTME: Energy densities of macronutrients, service names and catalog file names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded constants shared by the engine, the catalog loader and logging.

/// Energy yield of each macronutrient (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
}

/// Service names
pub mod service_names {
    /// Recipe suggester service name
    pub const RECIPE_SUGGESTER: &str = "recipe_suggester";
}

/// File names read by the catalog loader
pub mod catalog_files {
    /// Known ingredient vocabulary (JSON array of strings)
    pub const INGREDIENTS: &str = "ingredients.json";
    /// Recipe catalog (JSON array of recipes)
    pub const DISHES: &str = "dishes.json";
}
