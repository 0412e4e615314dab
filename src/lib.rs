// ABOUTME: Main library entry point for the recipe suggester engine
// ABOUTME: Ingredient matching, nutrition scoring, macro meal planning and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Suggester
//!
//! Matches a user's available ingredients against a recipe catalog, scores
//! food for nutritional balance, infers dietary tags and plans single meals
//! from calorie and macro targets.
//!
//! ## Architecture
//!
//! - **Intelligence**: normalizer, matcher, scorer, planner and the
//!   [`RecommendationEngine`] facade
//! - **Catalog**: recipe and ingredient data loaded from JSON
//! - **Config**: tunable thresholds with environment overrides
//!
//! ## Example Usage
//!
//! ```rust
//! use recipe_suggester::{normalize, Catalog, RecommendationEngine};
//!
//! let catalog = Catalog::from_json(
//!     r#"["Egg", "Milk"]"#,
//!     r#"[{"name": "Omelette", "ingredients": ["egg", "milk"],
//!          "nutrition": {"calories": 250, "protein": 18, "carbs": 3, "fat": 18}}]"#,
//! )?;
//!
//! let engine = RecommendationEngine::default();
//! let found = engine.recommend_by_ingredients(&["Egg ", "MILK"], catalog.recipes());
//! assert_eq!(found.len(), 1);
//! assert_eq!(normalize(" Egg ").as_str(), "egg");
//! # Ok::<(), recipe_suggester::errors::AppError>(())
//! ```

/// Recipe catalog loading
pub mod catalog;

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Error types and error envelope
pub mod errors;

/// Matching, scoring and planning engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use catalog::Catalog;
pub use errors::{AppError, AppResult, ErrorCode, ValidationError};
pub use intelligence::{
    normalize, GeneratedMeal, MacroTargets, MatchPolicy, Nutrition, Recipe, RecommendationEngine,
};
