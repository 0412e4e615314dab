// ABOUTME: Ingredient token normalization used before every ingredient comparison
// ABOUTME: Trims and lower-cases free text into canonical IngredientToken values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Canonical (trimmed, lower-cased) form of an ingredient name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientToken(String);

impl IngredientToken {
    /// Borrow the canonical text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for tokens that carried only whitespace
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the token, returning its text
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for IngredientToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IngredientToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonicalize free text for equality comparison
///
/// Total and idempotent: `normalize(normalize(x).as_str()) == normalize(x)`.
#[must_use]
pub fn normalize(text: &str) -> IngredientToken {
    IngredientToken(text.trim().to_lowercase())
}

/// Normalize raw tokens into a set, dropping those that are empty after trimming
pub fn normalized_set<I, S>(tokens: I) -> HashSet<IngredientToken>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| normalize(token.as_ref()))
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize("  Chicken Breast \t").as_str(), "chicken breast");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["  Tofu", "RICE ", "", "   ", "Crème Fraîche", "égg"] {
            let once = normalize(raw);
            assert_eq!(normalize(once.as_str()), once);
        }
    }

    #[test]
    fn test_set_drops_blank_and_duplicates() {
        let set = normalized_set(["Egg", " egg", "", "   ", "Milk"]);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&normalize("egg")));
        assert!(set.contains(&normalize("milk")));
    }
}
