// ABOUTME: Maps free-text image labels onto the known ingredient vocabulary
// ABOUTME: Keeps vocabulary order, removes duplicates and caps the number of detected ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use tracing::debug;

use super::normalizer::{normalize, normalized_set, IngredientToken};

/// Default cap on detected ingredients
pub const DEFAULT_DETECTION_LIMIT: usize = 5;

/// Known ingredients whose normalized form equals one of the labels
///
/// Results follow vocabulary order, not label order.
pub fn detect_ingredients<L, V>(labels: &[L], vocabulary: &[V], limit: usize) -> Vec<IngredientToken>
where
    L: AsRef<str>,
    V: AsRef<str>,
{
    let label_set = normalized_set(labels);
    let mut seen = HashSet::new();

    let detected: Vec<IngredientToken> = vocabulary
        .iter()
        .map(|entry| normalize(entry.as_ref()))
        .filter(|token| label_set.contains(token))
        .filter(|token| seen.insert(token.clone()))
        .take(limit)
        .collect();

    debug!(
        labels.count = label_set.len(),
        vocabulary.size = vocabulary.len(),
        detected.count = detected.len(),
        "Detected ingredients from labels"
    );
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order_and_dedupe() {
        let vocabulary = ["Tomato", "Egg", "tomato", "Cheese"];
        let labels = ["cheese", "Food", " TOMATO ", "egg"];

        let detected = detect_ingredients(&labels, &vocabulary, DEFAULT_DETECTION_LIMIT);
        let names: Vec<_> = detected.iter().map(IngredientToken::as_str).collect();
        assert_eq!(names, vec!["tomato", "egg", "cheese"]);
    }

    #[test]
    fn test_limit_applies_after_dedupe() {
        let vocabulary = ["a", "a", "b", "c"];
        let labels = ["a", "b", "c"];

        let detected = detect_ingredients(&labels, &vocabulary, 2);
        assert_eq!(detected, vec![normalize("a"), normalize("b")]);
    }

    #[test]
    fn test_no_labels_detects_nothing() {
        let labels: [&str; 0] = [];
        assert!(detect_ingredients(&labels, &["egg"], 5).is_empty());
    }
}
