// ABOUTME: Configuration management module for engine tuning parameters
// ABOUTME: Exposes intelligence configuration with environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the recipe suggester
//!
//! - **Intelligence**: scoring ranges, tag thresholds, matcher policy and meal
//!   name candidates, loaded from defaults plus environment overrides.

/// Intelligence module configuration
pub mod intelligence;

pub use intelligence::{
    ConfigError, EngineConfig, HealthRange, MacroPlannerConfig, MatchingConfig, ScoringConfig,
    TaggingConfig,
};
