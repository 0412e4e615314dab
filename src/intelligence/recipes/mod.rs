// ABOUTME: Recipe catalog data model used by the matching and scoring engine
// ABOUTME: Re-exports Recipe, Nutrition, MacroTargets and related value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes Module
//!
//! Value types shared by every engine component. All of them are plain data:
//! no identity beyond their field values and no mutation after construction.

/// Core data models for recipes and nutrition
pub mod models;

pub use models::{Difficulty, MacroPercentages, MacroTargets, Nutrition, Recipe};
