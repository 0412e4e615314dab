// ABOUTME: Ingredient-set matching between user input and the recipe catalog
// ABOUTME: Stable linear filter using exact normalized-token equality under a chosen policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe matcher
//!
//! Two containment rules exist and the caller picks one explicitly:
//!
//! - [`MatchPolicy::Strict`] (default): every ingredient of the recipe must be in
//!   the user's set. This answers "what can I cook with only what I have".
//! - [`MatchPolicy::Loose`]: at least one ingredient overlaps. This answers
//!   "what could I cook that uses something I have".
//!
//! An empty user set (after normalization) means no filter was requested and the
//! whole catalog is returned. Results always keep catalog order.

use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::normalizer::{normalized_set, IngredientToken};
use super::recipes::Recipe;
use crate::config::intelligence::MatchingConfig;

/// Containment rule used to decide whether a recipe matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// All recipe ingredients must be supplied
    #[default]
    Strict,
    /// Any supplied ingredient appearing in the recipe is enough
    Loose,
}

/// Unrecognized match policy name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown match policy `{0}` (expected `strict` or `loose`)")]
pub struct ParseMatchPolicyError(String);

impl FromStr for MatchPolicy {
    type Err = ParseMatchPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "loose" => Ok(Self::Loose),
            other => Err(ParseMatchPolicyError(other.to_owned())),
        }
    }
}

impl Display for MatchPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Strict => "strict",
            Self::Loose => "loose",
        })
    }
}

/// Finds catalog recipes for a set of user-supplied ingredients
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeMatcher {
    policy: MatchPolicy,
}

impl RecipeMatcher {
    /// Create a matcher with an explicit policy
    #[must_use]
    pub const fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// Create a matcher from configuration
    #[must_use]
    pub const fn from_config(config: &MatchingConfig) -> Self {
        Self::new(config.policy)
    }

    /// Policy in effect
    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Return catalog recipes matching the user's raw ingredient strings
    ///
    /// Blank tokens are ignored. If nothing remains, the full catalog is returned.
    pub fn find_matches<'a, S: AsRef<str>>(
        &self,
        user_tokens: &[S],
        catalog: &'a [Recipe],
    ) -> Vec<&'a Recipe> {
        let available = normalized_set(user_tokens);
        self.find_matches_normalized(&available, catalog)
    }

    /// Same as [`Self::find_matches`] for an already-normalized token set
    pub fn find_matches_normalized<'a>(
        &self,
        available: &HashSet<IngredientToken>,
        catalog: &'a [Recipe],
    ) -> Vec<&'a Recipe> {
        if available.is_empty() {
            debug!(
                catalog.size = catalog.len(),
                "No ingredients supplied, returning full catalog"
            );
            return catalog.iter().collect();
        }

        let matches: Vec<&Recipe> = catalog
            .iter()
            .filter(|recipe| self.matches(recipe, available))
            .collect();

        debug!(
            matcher.policy = %self.policy,
            matcher.tokens = available.len(),
            matcher.count = matches.len(),
            catalog.size = catalog.len(),
            "Matched recipes against ingredients"
        );
        matches
    }

    /// Check a single recipe against a normalized token set
    #[must_use]
    pub fn matches(&self, recipe: &Recipe, available: &HashSet<IngredientToken>) -> bool {
        let mut tokens = recipe.ingredient_tokens();
        match self.policy {
            MatchPolicy::Strict => tokens.all(|token| available.contains(&token)),
            MatchPolicy::Loose => tokens.any(|token| available.contains(&token)),
        }
    }
}
