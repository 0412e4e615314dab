// ABOUTME: Health score and dietary tag derivation from a food's macro composition
// ABOUTME: Deducts points for unbalanced macros and classifies keto, low-carb, high-protein, etc.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Scorer
//!
//! # Health score
//!
//! Starts at 100 and loses points for every balance check the food fails:
//!
//! | Check | Balanced | Deduction |
//! |-------|----------|-----------|
//! | Protein share of calories | 15-35% | 15 |
//! | Fat share of calories | 20-35% | 15 |
//! | Carbohydrate share of calories | 45-65% | 15 |
//! | Calories | 200-800 kcal | 10 |
//!
//! The result is clamped to 0-100. Food without a positive calorie figure is
//! *degenerate*: its percentages are undefined, so its score is defined as 0.
//! This is a documented outcome, not an error.
//!
//! # Dietary tags
//!
//! Percentage-derived tags are authoritative. Name-derived tags are a separate
//! best-effort layer that can only add tags and can be switched off.

use std::collections::btree_set::{BTreeSet, Iter as BTreeSetIter};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::normalizer::normalize;
use super::recipes::Nutrition;
use crate::config::intelligence::{EngineConfig, ScoringConfig, TaggingConfig};
use crate::errors::ValidationError;

/// Upper bound of the health score scale
pub const MAX_HEALTH_SCORE: u8 = 100;

/// Health score in the range 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HealthScore(u8);

impl HealthScore {
    /// Score assigned to degenerate nutrition
    pub const DEGENERATE: Self = Self(0);

    /// Create a score, saturating at 100
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > MAX_HEALTH_SCORE {
            Self(MAX_HEALTH_SCORE)
        } else {
            Self(value)
        }
    }

    fn clamped(raw: i32) -> Self {
        Self(u8::try_from(raw.clamp(0, i32::from(MAX_HEALTH_SCORE))).unwrap_or(0))
    }

    /// Numeric value
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Qualitative label, recomputed from the value on every call
    #[must_use]
    pub const fn label(&self) -> HealthLabel {
        HealthLabel::from_score(self.0)
    }
}

impl TryFrom<u8> for HealthScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX_HEALTH_SCORE {
            return Err(ValidationError::Range {
                field: "healthScore",
            });
        }
        Ok(Self(value))
    }
}

impl From<HealthScore> for u8 {
    fn from(score: HealthScore) -> Self {
        score.0
    }
}

impl Display for HealthScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/100 ({})", self.0, self.label())
    }
}

/// Qualitative band of a [`HealthScore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthLabel {
    /// 80 and above
    Excellent,
    /// 60 to 79
    Good,
    /// 40 to 59
    Fair,
    /// Below 40
    Poor,
}

impl HealthLabel {
    /// Map a score onto its band
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Display text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl Display for HealthLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Closed vocabulary of dietary tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    /// Very high fat, very low carbohydrate
    Keto,
    /// High fat, low carbohydrate
    KetoFriendly,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No gluten
    GlutenFree,
    /// High share of calories from protein
    HighProtein,
    /// Low share of calories from carbohydrates
    LowCarb,
    /// Low share of calories from fat
    LowFat,
    /// No dairy
    DairyFree,
    /// Paleo-compliant
    Paleo,
}

impl DietaryTag {
    /// Every tag, in vocabulary order
    pub const ALL: [Self; 10] = [
        Self::Keto,
        Self::KetoFriendly,
        Self::Vegetarian,
        Self::Vegan,
        Self::GlutenFree,
        Self::HighProtein,
        Self::LowCarb,
        Self::LowFat,
        Self::DairyFree,
        Self::Paleo,
    ];

    /// Wire name of the tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Keto => "keto",
            Self::KetoFriendly => "keto-friendly",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::GlutenFree => "gluten-free",
            Self::HighProtein => "high-protein",
            Self::LowCarb => "low-carb",
            Self::LowFat => "low-fat",
            Self::DairyFree => "dairy-free",
            Self::Paleo => "paleo",
        }
    }
}

impl Display for DietaryTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Text outside the dietary tag vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dietary tag `{0}`")]
pub struct UnknownDietaryTag(pub String);

impl FromStr for DietaryTag {
    type Err = UnknownDietaryTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = normalize(s).into_inner().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == canonical)
            .ok_or_else(|| UnknownDietaryTag(s.to_owned()))
    }
}

/// De-duplicated, ordered set of dietary tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DietaryTagSet(BTreeSet<DietaryTag>);

impl DietaryTagSet {
    /// Empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Add a tag, returning whether it was new
    pub fn insert(&mut self, tag: DietaryTag) -> bool {
        self.0.insert(tag)
    }

    /// Membership test
    #[must_use]
    pub fn contains(&self, tag: DietaryTag) -> bool {
        self.0.contains(&tag)
    }

    /// Number of tags
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no tag is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in vocabulary order
    pub fn iter(&self) -> BTreeSetIter<'_, DietaryTag> {
        self.0.iter()
    }
}

impl Extend<DietaryTag> for DietaryTagSet {
    fn extend<T: IntoIterator<Item = DietaryTag>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<DietaryTag> for DietaryTagSet {
    fn from_iter<T: IntoIterator<Item = DietaryTag>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DietaryTagSet {
    type Item = &'a DietaryTag;
    type IntoIter = BTreeSetIter<'a, DietaryTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Optional context for tag inference
#[derive(Debug, Clone, Copy, Default)]
pub struct TagContext<'a> {
    /// Display name of the food, enables name heuristics when present
    pub name: Option<&'a str>,
}

impl<'a> TagContext<'a> {
    /// Context carrying a display name
    #[must_use]
    pub const fn named(name: &'a str) -> Self {
        Self { name: Some(name) }
    }
}

/// Keyword to tags table for the name heuristic layer
const NAME_KEYWORD_TAGS: &[(&str, &[DietaryTag])] = &[
    ("tofu", &[DietaryTag::Vegan, DietaryTag::Vegetarian]),
    ("bowl", &[DietaryTag::Vegetarian]),
    ("salmon", &[DietaryTag::HighProtein]),
    ("tuna", &[DietaryTag::HighProtein]),
];

/// Best-effort tags guessed from a display name
///
/// Plain substring matching on the normalized name; never authoritative.
#[must_use]
pub fn name_heuristic_tags(name: &str) -> DietaryTagSet {
    let name = normalize(name);
    NAME_KEYWORD_TAGS
        .iter()
        .filter(|(keyword, _)| name.as_str().contains(keyword))
        .flat_map(|(_, tags)| tags.iter().copied())
        .collect()
}

/// Computes health scores and dietary tags
#[derive(Debug, Clone, Default)]
pub struct NutritionScorer {
    scoring: ScoringConfig,
    tagging: TaggingConfig,
}

impl NutritionScorer {
    /// Create a scorer with explicit configuration
    #[must_use]
    pub const fn new(scoring: ScoringConfig, tagging: TaggingConfig) -> Self {
        Self { scoring, tagging }
    }

    /// Create a scorer from the engine configuration
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.scoring.clone(), config.tagging.clone())
    }

    /// Same scorer with the name heuristic layer switched on or off
    #[must_use]
    pub const fn with_name_heuristics(mut self, enabled: bool) -> Self {
        self.tagging.name_heuristics_enabled = enabled;
        self
    }

    /// Compute the health score of a food
    #[must_use]
    pub fn score(&self, nutrition: &Nutrition) -> HealthScore {
        let Some(percentages) = nutrition.macro_percentages() else {
            debug!(
                nutrition.calories = nutrition.calories,
                "Degenerate nutrition, health score defined as 0"
            );
            return HealthScore::DEGENERATE;
        };

        let config = &self.scoring;
        let macro_deduction = i32::from(config.macro_deduction);
        let mut score = i32::from(config.base_score);

        if !config.protein_range.contains(percentages.protein_percent) {
            score -= macro_deduction;
        }
        if !config.fat_range.contains(percentages.fat_percent) {
            score -= macro_deduction;
        }
        if !config.carb_range.contains(percentages.carb_percent) {
            score -= macro_deduction;
        }
        if !config.calorie_range.contains(nutrition.calories) {
            score -= i32::from(config.calorie_deduction);
        }

        HealthScore::clamped(score)
    }

    /// Authoritative tags derived from macro percentages only
    ///
    /// Degenerate nutrition has no percentages and therefore no tags.
    #[must_use]
    pub fn percentage_tags(&self, nutrition: &Nutrition) -> DietaryTagSet {
        let mut tags = DietaryTagSet::new();
        let Some(pct) = nutrition.macro_percentages() else {
            return tags;
        };
        let t = &self.tagging;

        if pct.fat_percent > t.keto_fat_min && pct.carb_percent < t.keto_carb_max {
            tags.insert(DietaryTag::Keto);
        } else if pct.fat_percent > t.keto_friendly_fat_min
            && pct.carb_percent < t.keto_friendly_carb_max
        {
            tags.insert(DietaryTag::KetoFriendly);
        }
        if pct.carb_percent < t.low_carb_max {
            tags.insert(DietaryTag::LowCarb);
        }
        if pct.protein_percent > t.high_protein_min {
            tags.insert(DietaryTag::HighProtein);
        }
        if pct.fat_percent < t.low_fat_max {
            tags.insert(DietaryTag::LowFat);
        }

        tags
    }

    /// Percentage tags plus, when a name is given and heuristics are enabled, name tags
    #[must_use]
    pub fn tags(&self, nutrition: &Nutrition, context: TagContext<'_>) -> DietaryTagSet {
        let mut tags = self.percentage_tags(nutrition);
        if self.tagging.name_heuristics_enabled {
            if let Some(name) = context.name {
                tags.extend(name_heuristic_tags(name).iter().copied());
            }
        }
        tags
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_label_bands() {
        assert_eq!(HealthScore::new(100).label(), HealthLabel::Excellent);
        assert_eq!(HealthScore::new(80).label(), HealthLabel::Excellent);
        assert_eq!(HealthScore::new(79).label(), HealthLabel::Good);
        assert_eq!(HealthScore::new(60).label(), HealthLabel::Good);
        assert_eq!(HealthScore::new(59).label(), HealthLabel::Fair);
        assert_eq!(HealthScore::new(40).label(), HealthLabel::Fair);
        assert_eq!(HealthScore::new(39).label(), HealthLabel::Poor);
        assert_eq!(HealthScore::new(0).label(), HealthLabel::Poor);
    }

    #[test]
    fn test_score_saturates_at_100() {
        assert_eq!(HealthScore::new(250).value(), 100);
        assert!(HealthScore::try_from(101).is_err());
    }

    #[test]
    fn test_tag_parsing_is_lenient_about_case_and_separators() {
        assert_eq!("Keto Friendly".parse::<DietaryTag>().unwrap(), DietaryTag::KetoFriendly);
        assert_eq!("gluten_free".parse::<DietaryTag>().unwrap(), DietaryTag::GlutenFree);
        assert!("carnivore".parse::<DietaryTag>().is_err());
    }

    #[test]
    fn test_tag_set_serializes_in_vocabulary_order() {
        let tags: DietaryTagSet = [DietaryTag::LowCarb, DietaryTag::Keto, DietaryTag::LowCarb]
            .into_iter()
            .collect();

        assert_eq!(serde_json::to_string(&tags).unwrap(), r#"["keto","low-carb"]"#);
    }

    #[test]
    fn test_name_heuristics() {
        let tags = name_heuristic_tags("Crispy TOFU Bowl");
        assert!(tags.contains(DietaryTag::Vegan));
        assert!(tags.contains(DietaryTag::Vegetarian));
        assert_eq!(tags.len(), 2);

        assert!(name_heuristic_tags("Seared tuna").contains(DietaryTag::HighProtein));
        assert!(name_heuristic_tags("Beef stew").is_empty());
    }

    #[test]
    fn test_heuristics_can_be_disabled() {
        let scorer = NutritionScorer::default().with_name_heuristics(false);
        let nutrition = Nutrition::new(400.0, 20.0, 50.0, 13.0).unwrap();

        let tags = scorer.tags(&nutrition, TagContext::named("Tofu bowl"));
        assert!(!tags.contains(DietaryTag::Vegan));
    }
}
