// ABOUTME: Classifies a macro gram amount against a reference maximum into Low/Moderate/High
// ABOUTME: Used to annotate recommended meals with per-macro intensity bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Macronutrient being assessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroKind {
    /// Protein grams
    Protein,
    /// Carbohydrate grams
    Carbs,
    /// Fat grams
    Fat,
}

impl MacroKind {
    /// Percent-of-maximum thresholds above which the amount is (High, Moderate)
    const fn thresholds(self) -> (f64, f64) {
        match self {
            Self::Protein => (60.0, 30.0),
            Self::Carbs | Self::Fat => (70.0, 40.0),
        }
    }
}

/// Intensity band of a macro amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroLevel {
    /// At or below the moderate threshold
    Low,
    /// Between the moderate and high thresholds
    Moderate,
    /// Above the high threshold
    High,
}

/// Level together with the macro it describes, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroAssessment {
    /// Macro assessed
    pub kind: MacroKind,
    /// Resulting band
    pub level: MacroLevel,
}

impl MacroAssessment {
    /// Short status text, e.g. "High Fat" or "Good Protein"
    #[must_use]
    pub const fn status_text(&self) -> &'static str {
        match (self.kind, self.level) {
            (MacroKind::Fat, MacroLevel::High) => "High Fat",
            (MacroKind::Fat, MacroLevel::Low) => "Low Fat",
            (MacroKind::Protein, MacroLevel::High) => "High Protein",
            (MacroKind::Protein, MacroLevel::Moderate) => "Good Protein",
            (MacroKind::Protein, MacroLevel::Low) => "Low Protein",
            (MacroKind::Carbs, MacroLevel::High) => "High Carb",
            (MacroKind::Carbs, MacroLevel::Low) => "Low Carb",
            (MacroKind::Fat | MacroKind::Carbs, MacroLevel::Moderate) => "Moderate",
        }
    }
}

impl Display for MacroAssessment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.status_text())
    }
}

/// Classify `value` grams as a share of `reference_max` grams
///
/// A non-positive or non-finite reference yields [`MacroLevel::Low`].
#[must_use]
pub fn assess_macro_level(kind: MacroKind, value: f64, reference_max: f64) -> MacroLevel {
    if !reference_max.is_finite() || reference_max <= 0.0 {
        return MacroLevel::Low;
    }
    let percent = value / reference_max * 100.0;
    let (high, moderate) = kind.thresholds();
    if percent > high {
        MacroLevel::High
    } else if percent > moderate {
        MacroLevel::Moderate
    } else {
        MacroLevel::Low
    }
}

/// Assess and wrap with the macro kind
#[must_use]
pub fn assess(kind: MacroKind, value: f64, reference_max: f64) -> MacroAssessment {
    MacroAssessment {
        kind,
        level: assess_macro_level(kind, value, reference_max),
    }
}
